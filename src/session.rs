use anyhow::{anyhow, Context, Result};
use matrix_sdk::{authentication::matrix::MatrixSession, AuthSession, Client};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Login state persisted between restarts so the bot keeps its device
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedSession {
    pub homeserver: String,
    pub store_path: PathBuf,
    pub user_session: MatrixSession,
}

pub async fn load(session_file: &Path) -> Result<SavedSession> {
    let data = tokio::fs::read_to_string(session_file)
        .await
        .with_context(|| format!("Failed to read session file {:?}", session_file))?;
    serde_json::from_str(&data).context("Session file is not valid JSON")
}

/// Write the client's current login to `session_file`
pub async fn save(
    client: &Client,
    session_file: &Path,
    homeserver: &str,
    store_path: &Path,
) -> Result<()> {
    let Some(AuthSession::Matrix(user_session)) = client.session() else {
        return Err(anyhow!("No active Matrix session to save"));
    };

    let saved = SavedSession {
        homeserver: homeserver.to_string(),
        store_path: store_path.to_path_buf(),
        user_session,
    };
    let data = serde_json::to_string_pretty(&saved)?;
    tokio::fs::write(session_file, data)
        .await
        .with_context(|| format!("Failed to write session file {:?}", session_file))?;

    info!("✅ Session saved to: {:?}", session_file);
    Ok(())
}

/// Forget the saved login; a missing file is not an error
pub async fn remove(session_file: &Path) -> Result<()> {
    match tokio::fs::remove_file(session_file).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove session file {:?}", session_file)),
    }
}
