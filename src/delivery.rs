use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::{
    attachment::AttachmentConfig, ruma::events::room::message::RoomMessageEventContent, Room,
};
use std::path::Path;
use tracing::{error, info, warn};

use crate::error::AssetError;
use crate::responder::Outbound;

/// Outbound side of the messaging platform
#[async_trait]
pub trait Outbox: Send + Sync {
    async fn send_text(&self, markdown: &str) -> Result<()>;

    async fn send_video(&self, path: &Path, caption: &str) -> Result<()>;
}

/// Sends `messages` in order.
///
/// Video failures are logged and swallowed; text failures stop the remaining sends.
pub async fn deliver<O: Outbox + ?Sized>(outbox: &O, messages: &[Outbound]) -> Result<()> {
    for message in messages {
        match message {
            Outbound::Video { path, caption } => {
                if let Err(e) = outbox.send_video(path, caption).await {
                    let failure = AssetError::SendFailure {
                        path: path.clone(),
                        reason: format!("{:#}", e),
                    };
                    warn!("⚠️  Could not send video: {}", failure);
                }
            }
            Outbound::Text(text) => {
                if let Err(e) = outbox.send_text(text).await {
                    error!(error = %e, "✗ Failed to send message");
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}

/// Delivers into a single Matrix room
pub struct MatrixOutbox {
    room: Room,
}

impl MatrixOutbox {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl Outbox for MatrixOutbox {
    async fn send_text(&self, markdown: &str) -> Result<()> {
        self.room
            .send(RoomMessageEventContent::text_markdown(markdown))
            .await
            .context("Failed to send text message")?;
        Ok(())
    }

    async fn send_video(&self, path: &Path, caption: &str) -> Result<()> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read video {:?}", path))?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("wopr.mp4")
            .to_string();
        let content_type: mime::Mime = "video/mp4".parse().context("Invalid video mime type")?;

        info!(
            room_id = %self.room.room_id(),
            bytes = data.len(),
            "📼 Uploading video"
        );
        self.room
            .send_attachment(filename, &content_type, data, AttachmentConfig::new())
            .await
            .context("Failed to upload video")?;

        self.send_text(caption).await
    }
}
