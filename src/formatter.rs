//! Markdown renderings of everything the bot says.
//!
//! Output is CommonMark as understood by Matrix clients: fenced code blocks for the
//! WOPR banners, `**bold**`, `_italic_` and ordered lists.

use crate::error::SelectionError;
use crate::store::{ScenarioRecord, ScenarioStore};

/// Records per `list` message; keeps each message under the platform's size ceiling
pub const LIST_CHUNK_SIZE: usize = 35;

pub const VIDEO_CAPTION: &str = "**W.O.P.R. PROCESSING...**";

const WOPR_HEADER: &str = "```
+------------------------------------------+
|    W.O.P.R. - WAR OPERATION PLAN         |
|          RESPONSE SYSTEM                 |
|      CHEYENNE MOUNTAIN COMPLEX           |
+------------------------------------------+
|    GREETINGS, PROFESSOR FALKEN.          |
+------------------------------------------+
```";

const OUTPUT_HEADER: &str = "```
+------------------------------------------+
|            W.O.P.R. OUTPUT               |
+------------------------------------------+
```";

pub fn render_scenario(record: &ScenarioRecord) -> String {
    format!(
        "```
+------------------------------------------+
|  GLOBAL THERMONUCLEAR WAR SCENARIO #{id:03}  |
+------------------------------------------+
```
**{name}**

{description}

_WINNER: NONE_",
        id = record.id,
        name = record.name,
        description = record.description,
    )
}

pub fn render_quote(quote: &str) -> String {
    format!("{OUTPUT_HEADER}\n**JOSHUA says:**\n\n_{quote}_")
}

/// One numbered-list message per chunk of at most `chunk_size` records
pub fn render_list(store: &ScenarioStore, chunk_size: usize) -> Vec<String> {
    let total = store.len();
    let chunk_size = chunk_size.max(1);

    store
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, chunk)| {
            let start = index * chunk_size + 1;
            let end = (start + chunk.len() - 1).min(total);

            let mut lines = Vec::with_capacity(chunk.len() + 2);
            lines.push(format!("📋 **SCENARIOS {start}-{end}**"));
            lines.push(String::new());
            lines.extend(chunk.iter().map(|s| format!("{}. {}", s.id, s.name)));
            lines.join("\n")
        })
        .collect()
}

pub fn render_greeting(count: usize, prefix: char) -> String {
    format!(
        "{WOPR_HEADER}

🎮 **SHALL WE PLAY A GAME?**

I am JOSHUA, the War Operation Plan Response computer.
I have {count} nuclear war scenarios in my database.

**Available Commands:**

- {p}scenario - Random nuclear war scenario
- {p}scenario `<1-{count}>` - Specific scenario
- {p}list - List all scenarios
- {p}quote - Words of wisdom
- {p}help - Show this message

_\"The only winning move is not to play.\"_",
        p = prefix,
    )
}

pub fn render_help(count: usize, prefix: char) -> String {
    format!(
        "🖥️ **JOSHUA COMMAND INTERFACE**

- {p}start - Initialize WOPR greeting
- {p}scenario - Execute random war simulation
- {p}scenario `<number>` - Execute specific scenario (1-{count})
- {p}list - Display all scenario designations
- {p}quote - Retrieve WOPR wisdom
- {p}help - Display this interface

_Example:_ `{p}scenario 11` → SEATO Decapitating

**Source:** WarGames (1983)",
        p = prefix,
    )
}

pub fn render_unknown(prefix: char) -> String {
    format!("❓ Unknown command. Type {prefix}help for available commands.\n\n_SHALL WE PLAY A GAME?_")
}

pub fn render_selection_error(error: &SelectionError, prefix: char) -> String {
    match error {
        SelectionError::OutOfRange { max, .. } => {
            format!("⚠️ Invalid scenario number. Please choose 1-{max}.")
        }
        SelectionError::NotANumber(_) => {
            format!("⚠️ Please provide a valid number. Example: `{prefix}scenario 11`")
        }
    }
}
