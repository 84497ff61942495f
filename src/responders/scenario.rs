use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::log_command;
use crate::formatter;
use crate::media::VideoAsset;
use crate::responder::{Outbound, Responder, ResponderContext, ResponderResult};
use crate::selector;
use crate::store::ScenarioStore;

/// `/scenario [n]`: a random or specific war scenario, preceded by the WOPR video
/// when it is available
pub struct ScenarioResponder {
    store: Arc<ScenarioStore>,
    video: Option<VideoAsset>,
    prefix: char,
}

impl ScenarioResponder {
    pub fn new(store: Arc<ScenarioStore>, video: Option<VideoAsset>, prefix: char) -> Self {
        Self {
            store,
            video,
            prefix,
        }
    }

    fn video_message(&self) -> Option<Outbound> {
        let video = self.video.as_ref()?;
        match video.available() {
            Ok(path) => Some(Outbound::Video {
                path: path.to_path_buf(),
                caption: formatter::VIDEO_CAPTION.to_string(),
            }),
            Err(e) => {
                debug!("Skipping video: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl Responder for ScenarioResponder {
    fn name(&self) -> &str {
        "ScenarioResponder"
    }

    fn priority(&self) -> i32 {
        100
    }

    async fn should_handle(&self, context: &ResponderContext) -> bool {
        context.is_command(&["scenario"])
    }

    async fn handle(&self, context: &ResponderContext) -> Result<ResponderResult> {
        let requested = context.request.first_arg();

        let selected = match selector::pick(&self.store, requested) {
            Ok(record) => record,
            Err(e) => {
                log_command(&context.request, &format!("rejected: {}", e));
                return Ok(ResponderResult::text(formatter::render_selection_error(
                    &e,
                    self.prefix,
                )));
            }
        };

        let detail = match requested {
            Some(_) => format!("#{}: {}", selected.id, selected.name),
            None => format!("random -> #{}: {}", selected.id, selected.name),
        };
        log_command(&context.request, &detail);

        let mut messages = Vec::with_capacity(2);
        messages.extend(self.video_message());
        messages.push(Outbound::Text(formatter::render_scenario(selected)));
        Ok(ResponderResult::Handled(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRequest;
    use crate::store::sample_store;

    fn context(args: &[&str]) -> ResponderContext {
        ResponderContext::new(CommandRequest {
            name: "scenario".to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            sender: "@falken:wopr.mil".to_string(),
            room_id: "!room:wopr.mil".to_string(),
        })
    }

    #[tokio::test]
    async fn video_precedes_text_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wopr.mp4");
        std::fs::write(&path, b"video").unwrap();

        let responder = ScenarioResponder::new(
            Arc::new(sample_store(&["A", "B"])),
            Some(VideoAsset::new(&path)),
            '/',
        );
        let result = responder.handle(&context(&["1"])).await.unwrap();

        let ResponderResult::Handled(messages) = result else {
            panic!("scenario is always handled");
        };
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[0],
            Outbound::Video {
                path,
                caption: formatter::VIDEO_CAPTION.to_string(),
            }
        );
        assert!(matches!(&messages[1], Outbound::Text(text) if text.contains("#001")));
    }

    #[tokio::test]
    async fn missing_video_is_skipped_silently() {
        let dir = tempfile::tempdir().unwrap();
        let responder = ScenarioResponder::new(
            Arc::new(sample_store(&["A", "B"])),
            Some(VideoAsset::new(dir.path().join("absent.mp4"))),
            '/',
        );
        let result = responder.handle(&context(&[])).await.unwrap();

        let ResponderResult::Handled(messages) = result else {
            panic!("scenario is always handled");
        };
        assert_eq!(messages.len(), 1);
        assert!(matches!(&messages[0], Outbound::Text(text) if text.contains("WINNER: NONE")));
    }

    #[tokio::test]
    async fn selection_error_sends_no_video() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wopr.mp4");
        std::fs::write(&path, b"video").unwrap();

        let responder = ScenarioResponder::new(
            Arc::new(sample_store(&["A"])),
            Some(VideoAsset::new(&path)),
            '/',
        );
        let result = responder.handle(&context(&["9"])).await.unwrap();
        assert_eq!(
            result,
            ResponderResult::text("⚠️ Invalid scenario number. Please choose 1-1.")
        );
    }
}
