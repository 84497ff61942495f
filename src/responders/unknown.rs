use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::formatter;
use crate::responder::{Responder, ResponderContext, ResponderResult};

/// Fallback for any command no other responder claimed
pub struct UnknownCommandResponder {
    prefix: char,
}

impl UnknownCommandResponder {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }
}

#[async_trait]
impl Responder for UnknownCommandResponder {
    fn name(&self) -> &str {
        "UnknownCommandResponder"
    }

    fn priority(&self) -> i32 {
        // Lowest priority: must run after every real command
        -100
    }

    async fn should_handle(&self, _context: &ResponderContext) -> bool {
        true
    }

    async fn handle(&self, context: &ResponderContext) -> Result<ResponderResult> {
        info!(
            command = %context.request.name,
            sender = %context.request.sender,
            "❓ Unknown command"
        );
        Ok(ResponderResult::text(formatter::render_unknown(self.prefix)))
    }
}
