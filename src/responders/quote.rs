use anyhow::Result;
use async_trait::async_trait;

use super::log_command;
use crate::formatter;
use crate::quotes;
use crate::responder::{Responder, ResponderContext, ResponderResult};

pub struct QuoteResponder;

impl QuoteResponder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Responder for QuoteResponder {
    fn name(&self) -> &str {
        "QuoteResponder"
    }

    fn priority(&self) -> i32 {
        100
    }

    async fn should_handle(&self, context: &ResponderContext) -> bool {
        context.is_command(&["quote"])
    }

    async fn handle(&self, context: &ResponderContext) -> Result<ResponderResult> {
        let quote = quotes::random_quote();
        let preview: String = quote.chars().take(30).collect();
        log_command(&context.request, &format!("{}...", preview));
        Ok(ResponderResult::text(formatter::render_quote(quote)))
    }
}
