use std::sync::Arc;
use tracing::info;

use crate::command::CommandRequest;
use crate::media::VideoAsset;
use crate::responder_manager::ResponderManager;
use crate::store::ScenarioStore;

pub mod help;
pub mod list;
pub mod quote;
pub mod scenario;
pub mod start;
pub mod unknown;

pub use help::HelpResponder;
pub use list::ListResponder;
pub use quote::QuoteResponder;
pub use scenario::ScenarioResponder;
pub use start::StartResponder;
pub use unknown::UnknownCommandResponder;

/// Build the responder chain for the full command surface.
///
/// `prefix` is the command prefix shown in help and error texts.
pub fn default_manager(
    store: Arc<ScenarioStore>,
    video: Option<VideoAsset>,
    prefix: char,
) -> ResponderManager {
    let mut manager = ResponderManager::new();
    manager.register(Arc::new(StartResponder::new(store.clone(), prefix)));
    manager.register(Arc::new(HelpResponder::new(store.clone(), prefix)));
    manager.register(Arc::new(ScenarioResponder::new(store.clone(), video, prefix)));
    manager.register(Arc::new(ListResponder::new(store)));
    manager.register(Arc::new(QuoteResponder::new()));
    manager.register(Arc::new(UnknownCommandResponder::new(prefix)));
    manager
}

/// One structured log line per handled command
pub(crate) fn log_command(request: &CommandRequest, detail: &str) {
    info!(
        command = %request.name,
        sender = %request.sender,
        room_id = %request.room_id,
        detail = %detail,
        "🎮 Command"
    );
}
