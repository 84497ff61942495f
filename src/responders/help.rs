use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::log_command;
use crate::formatter;
use crate::responder::{Responder, ResponderContext, ResponderResult};
use crate::store::ScenarioStore;

pub struct HelpResponder {
    store: Arc<ScenarioStore>,
    prefix: char,
}

impl HelpResponder {
    pub fn new(store: Arc<ScenarioStore>, prefix: char) -> Self {
        Self { store, prefix }
    }
}

#[async_trait]
impl Responder for HelpResponder {
    fn name(&self) -> &str {
        "HelpResponder"
    }

    fn priority(&self) -> i32 {
        100
    }

    async fn should_handle(&self, context: &ResponderContext) -> bool {
        context.is_command(&["help"])
    }

    async fn handle(&self, context: &ResponderContext) -> Result<ResponderResult> {
        log_command(&context.request, "");
        Ok(ResponderResult::text(formatter::render_help(
            self.store.len(),
            self.prefix,
        )))
    }
}
