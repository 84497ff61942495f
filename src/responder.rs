use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::command::CommandRequest;

/// Context provided to responders for handling a command
#[derive(Debug, Clone)]
pub struct ResponderContext {
    /// The parsed command
    pub request: CommandRequest,
}

impl ResponderContext {
    pub fn new(request: CommandRequest) -> Self {
        Self { request }
    }

    /// Whether the command name is one of `names`
    pub fn is_command(&self, names: &[&str]) -> bool {
        names.contains(&self.request.name.as_str())
    }
}

/// A single message the delivery adapter should send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Markdown text
    Text(String),
    /// Best-effort video attachment
    Video { path: PathBuf, caption: String },
}

/// Response from a responder
#[derive(Debug, PartialEq, Eq)]
pub enum ResponderResult {
    /// Command was handled; messages are sent in order
    Handled(Vec<Outbound>),
    /// Command was not handled, pass to next responder
    NotHandled,
}

impl ResponderResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Handled(vec![Outbound::Text(text.into())])
    }
}

/// Core trait that all command responders implement
#[async_trait]
pub trait Responder: Send + Sync {
    /// Returns the name of this responder
    fn name(&self) -> &str;

    /// Returns the priority of this responder (higher = checked first)
    /// Default priority is 0
    fn priority(&self) -> i32 {
        0
    }

    /// Cheap filter, called before handle()
    async fn should_handle(&self, context: &ResponderContext) -> bool;

    /// Only called if should_handle() returns true
    async fn handle(&self, context: &ResponderContext) -> Result<ResponderResult>;
}
