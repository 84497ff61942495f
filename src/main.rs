use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    config::SyncSettings,
    event_handler::Ctx,
    ruma::events::room::message::{MessageType, OriginalSyncRoomMessageEvent},
    Room,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod client;
mod command;
mod config;
mod delivery;
mod error;
mod formatter;
mod media;
mod quotes;
mod responder;
mod responder_manager;
mod responders;
mod selector;
mod session;
mod store;

use config::{ContentConfig, MatrixConfig};
use delivery::MatrixOutbox;
use media::VideoAsset;
use responder::ResponderContext;
use responder_manager::ResponderManager;
use store::ScenarioStore;

/// SHALL WE PLAY A GAME? A Matrix bot serving WarGames (1983) war scenarios.
#[derive(Parser, Debug)]
#[command(name = "wopr-bot", version)]
struct Args {
    /// Scenario document (overrides WOPR_SCENARIOS)
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Video attached to scenario responses (overrides WOPR_VIDEO)
    #[arg(long, conflicts_with = "no_video")]
    video: Option<PathBuf>,

    /// Never attach the video
    #[arg(long)]
    no_video: bool,

    /// Discard the saved session and state store, then log in again
    #[arg(long)]
    fresh_login: bool,

    /// Validate the scenario document and exit without connecting
    #[arg(long)]
    check: bool,
}

/// Shared with every room message handler
#[derive(Clone)]
struct BotState {
    manager: Arc<ResponderManager>,
    prefixes: Arc<[char]>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "wopr_bot=info,matrix_sdk=warn".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut content = ContentConfig::from_env()?;
    if let Some(path) = args.scenarios {
        content.scenarios_path = path;
    }
    if let Some(path) = args.video {
        content.video_path = Some(path);
    }
    if args.no_video {
        content.video_path = None;
    }

    let store = ScenarioStore::load(&content.scenarios_path).with_context(|| {
        format!("Cannot start without scenarios from {:?}", content.scenarios_path)
    })?;

    if args.check {
        info!(
            "✓ {} scenarios OK ({} list messages)",
            store.len(),
            formatter::render_list(&store, formatter::LIST_CHUNK_SIZE).len()
        );
        return Ok(());
    }

    let matrix = MatrixConfig::from_env()?;

    let prefix = content.display_prefix();
    let manager = responders::default_manager(
        Arc::new(store),
        content.video_path.map(VideoAsset::new),
        prefix,
    );
    info!(
        "📋 Registered {} responders: {:?}",
        manager.count(),
        manager.list_responders()
    );

    if args.fresh_login {
        info!("🔄 Fresh login requested");
        session::remove(&matrix.session_file).await?;
        client::clear_store(&matrix.store_path).await?;
    }

    info!("Connecting to homeserver: {}", matrix.homeserver);
    let (client, how) = client::restore_or_login(&matrix).await?;
    info!("✓ Matrix session ready ({})", how);

    // Skip the backlog: only messages after this sync get answers
    let response = client
        .sync_once(SyncSettings::default())
        .await
        .context("Initial sync failed")?;

    client.add_event_handler_context(BotState {
        manager: Arc::new(manager),
        prefixes: content.command_prefixes.into(),
    });
    client.add_event_handler(on_room_message);

    info!("🖥️  WOPR ONLINE - SHALL WE PLAY A GAME?");

    client
        .sync(SyncSettings::default().token(response.next_batch))
        .await
        .context("Sync loop failed")?;

    Ok(())
}

/// Event handler for room messages
async fn on_room_message(
    event: OriginalSyncRoomMessageEvent,
    room: Room,
    Ctx(state): Ctx<BotState>,
) {
    // Ignore messages from ourselves to prevent loops
    let sender = &event.sender;
    if sender == room.own_user_id() {
        return;
    }

    let MessageType::Text(text_content) = &event.content.msgtype else {
        return;
    };

    let room_id = room.room_id().to_string();
    let Some(request) = command::parse(
        &text_content.body,
        &state.prefixes,
        sender.as_str(),
        &room_id,
    ) else {
        return;
    };

    let context = ResponderContext::new(request);
    let messages = match state.manager.process_message(&context).await {
        Ok(Some(messages)) => messages,
        Ok(None) => return,
        Err(e) => {
            error!(room_id = %room_id, error = %e, "✗ Responder failed");
            return;
        }
    };

    let outbox = MatrixOutbox::new(room);
    if let Err(e) = delivery::deliver(&outbox, &messages).await {
        error!(
            room_id = %room_id,
            command = %context.request.name,
            error = %e,
            "✗ Failed to deliver response"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn video_flags_conflict() {
        assert!(Args::try_parse_from(["wopr-bot", "--video", "a.mp4", "--no-video"]).is_err());

        let args = Args::try_parse_from(["wopr-bot", "--check", "--scenarios", "s.json"]).unwrap();
        assert!(args.check);
        assert_eq!(args.scenarios, Some(PathBuf::from("s.json")));
    }
}
