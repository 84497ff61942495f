use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::responder::{Outbound, Responder, ResponderContext, ResponderResult};

/// Routes commands through registered responders (chain of responsibility)
pub struct ResponderManager {
    responders: Vec<Arc<dyn Responder>>,
}

impl ResponderManager {
    pub fn new() -> Self {
        Self {
            responders: Vec::new(),
        }
    }

    /// Register a responder; the chain stays sorted by priority (highest first)
    pub fn register(&mut self, responder: Arc<dyn Responder>) {
        debug!(
            "📝 Registering responder: {} (priority: {})",
            responder.name(),
            responder.priority()
        );
        self.responders.push(responder);
        self.responders
            .sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Returns the messages of the first responder that handles the command,
    /// or None if every responder declined
    pub async fn process_message(&self, context: &ResponderContext) -> Result<Option<Vec<Outbound>>> {
        for responder in &self.responders {
            if !responder.should_handle(context).await {
                continue;
            }

            match responder.handle(context).await? {
                ResponderResult::Handled(messages) => {
                    debug!(
                        "✅ /{} handled by {} ({} message(s))",
                        context.request.name,
                        responder.name(),
                        messages.len()
                    );
                    return Ok(Some(messages));
                }
                ResponderResult::NotHandled => {
                    debug!(
                        "⏭️  Responder '{}' returned NotHandled, trying next",
                        responder.name()
                    );
                }
            }
        }

        warn!("⚠️  No responder handled /{}", context.request.name);
        Ok(None)
    }

    pub fn count(&self) -> usize {
        self.responders.len()
    }

    /// All registered responders with their priorities, in dispatch order
    pub fn list_responders(&self) -> Vec<(String, i32)> {
        self.responders
            .iter()
            .map(|r| (r.name().to_string(), r.priority()))
            .collect()
    }
}

impl Default for ResponderManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRequest;
    use async_trait::async_trait;

    struct Fixed {
        name: &'static str,
        priority: i32,
        result: fn() -> ResponderResult,
    }

    #[async_trait]
    impl Responder for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        async fn should_handle(&self, _context: &ResponderContext) -> bool {
            true
        }

        async fn handle(&self, _context: &ResponderContext) -> Result<ResponderResult> {
            Ok((self.result)())
        }
    }

    fn context() -> ResponderContext {
        ResponderContext::new(CommandRequest {
            name: "anything".to_string(),
            args: Vec::new(),
            sender: "@u:h".to_string(),
            room_id: "!r:h".to_string(),
        })
    }

    #[tokio::test]
    async fn highest_priority_wins_and_not_handled_falls_through() {
        let mut manager = ResponderManager::new();
        manager.register(Arc::new(Fixed {
            name: "low",
            priority: 1,
            result: || ResponderResult::text("low"),
        }));
        manager.register(Arc::new(Fixed {
            name: "high",
            priority: 50,
            result: || ResponderResult::NotHandled,
        }));

        assert_eq!(manager.count(), 2);
        assert_eq!(
            manager.list_responders(),
            vec![("high".to_string(), 50), ("low".to_string(), 1)]
        );

        let messages = manager.process_message(&context()).await.unwrap();
        assert_eq!(messages, Some(vec![Outbound::Text("low".to_string())]));
    }

    #[tokio::test]
    async fn empty_chain_returns_none() {
        let manager = ResponderManager::default();
        assert_eq!(manager.process_message(&context()).await.unwrap(), None);
    }
}
