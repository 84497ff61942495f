use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::log_command;
use crate::formatter::{self, LIST_CHUNK_SIZE};
use crate::responder::{Outbound, Responder, ResponderContext, ResponderResult};
use crate::store::ScenarioStore;

/// `/list`: every scenario name, one message per chunk
pub struct ListResponder {
    store: Arc<ScenarioStore>,
}

impl ListResponder {
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Responder for ListResponder {
    fn name(&self) -> &str {
        "ListResponder"
    }

    fn priority(&self) -> i32 {
        100
    }

    async fn should_handle(&self, context: &ResponderContext) -> bool {
        context.is_command(&["list"])
    }

    async fn handle(&self, context: &ResponderContext) -> Result<ResponderResult> {
        log_command(&context.request, "");
        let messages = formatter::render_list(&self.store, LIST_CHUNK_SIZE)
            .into_iter()
            .map(Outbound::Text)
            .collect();
        Ok(ResponderResult::Handled(messages))
    }
}
