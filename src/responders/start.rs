use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::log_command;
use crate::formatter;
use crate::responder::{Responder, ResponderContext, ResponderResult};
use crate::store::ScenarioStore;

/// `/start`: WOPR greeting with the size of the database
pub struct StartResponder {
    store: Arc<ScenarioStore>,
    prefix: char,
}

impl StartResponder {
    pub fn new(store: Arc<ScenarioStore>, prefix: char) -> Self {
        Self { store, prefix }
    }
}

#[async_trait]
impl Responder for StartResponder {
    fn name(&self) -> &str {
        "StartResponder"
    }

    fn priority(&self) -> i32 {
        100
    }

    async fn should_handle(&self, context: &ResponderContext) -> bool {
        context.is_command(&["start"])
    }

    async fn handle(&self, context: &ResponderContext) -> Result<ResponderResult> {
        log_command(&context.request, "");
        Ok(ResponderResult::text(formatter::render_greeting(
            self.store.len(),
            self.prefix,
        )))
    }
}
