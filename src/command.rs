/// A command parsed from an inbound room message. Lives for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Lowercased command name without prefix, e.g. `scenario`
    pub name: String,
    pub args: Vec<String>,
    /// Matrix user ID of the sender
    pub sender: String,
    pub room_id: String,
}

impl CommandRequest {
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Parse `body` as a command if it starts with one of `prefixes`.
///
/// `/scenario@wopr 11` and `!SCENARIO 11` both yield `scenario` with args `["11"]`.
pub fn parse(body: &str, prefixes: &[char], sender: &str, room_id: &str) -> Option<CommandRequest> {
    let mut tokens = body.split_whitespace();
    let head = tokens.next()?;

    let mut chars = head.chars();
    let prefix = chars.next()?;
    if !prefixes.contains(&prefix) {
        return None;
    }

    let name = chars.as_str();
    let name = name.split('@').next().unwrap_or(name).to_lowercase();
    if name.is_empty() {
        return None;
    }

    Some(CommandRequest {
        name,
        args: tokens.map(str::to_string).collect(),
        sender: sender.to_string(),
        room_id: room_id.to_string(),
    })
}
