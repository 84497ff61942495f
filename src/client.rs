use anyhow::{Context, Result};
use matrix_sdk::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::MatrixConfig;
use crate::session;

const DEVICE_DISPLAY_NAME: &str = "WOPR Bot";

/// Build a Matrix client backed by the SQLite state store
pub async fn build_client(homeserver: &str, config: &MatrixConfig) -> Result<Client> {
    Client::builder()
        .homeserver_url(homeserver)
        .sqlite_store(&config.store_path, config.store_passphrase.as_deref())
        .build()
        .await
        .context("Failed to create Matrix client")
}

/// Restore the saved session if there is one, otherwise log in with a password.
///
/// Returns the client and how it was obtained (`restored` / `new_login`) for logging.
pub async fn restore_or_login(config: &MatrixConfig) -> Result<(Client, &'static str)> {
    if !config.session_file.exists() {
        return fresh_login(config).await;
    }

    info!("📁 Found saved session file, attempting to restore...");
    match restore(config).await {
        Ok(client) => Ok((client, "restored")),
        Err(e) => {
            warn!("⚠️  Failed to restore session: {:#}", e);
            warn!("   Will perform fresh login");
            clear_store(&config.store_path).await?;
            fresh_login(config).await
        }
    }
}

async fn restore(config: &MatrixConfig) -> Result<Client> {
    let saved = session::load(&config.session_file).await?;
    info!("  Homeserver: {}", saved.homeserver);
    info!("  User ID: {}", saved.user_session.meta.user_id);
    info!("  Device ID: {}", saved.user_session.meta.device_id);

    let client = build_client(&saved.homeserver, config).await?;
    client
        .restore_session(saved.user_session)
        .await
        .context("Failed to restore session")?;

    info!("✅ Session restored successfully");
    Ok(client)
}

/// Password login; the new session is saved for the next start
pub async fn fresh_login(config: &MatrixConfig) -> Result<(Client, &'static str)> {
    info!("📝 Performing fresh login");
    let client = build_client(&config.homeserver, config).await?;

    info!("🔐 Logging in as: {}", config.username);
    client
        .matrix_auth()
        .login_username(&config.username, &config.password)
        .initial_device_display_name(DEVICE_DISPLAY_NAME)
        .await
        .context("Failed to login")?;

    info!("✅ Successfully logged in");
    if let Some(user_id) = client.user_id() {
        info!("  User ID: {}", user_id);
    }
    if let Some(device_id) = client.device_id() {
        info!("  Device ID: {}", device_id);
    }

    session::save(&client, &config.session_file, &config.homeserver, &config.store_path).await?;

    Ok((client, "new_login"))
}

/// Remove the state store directory, retrying briefly while files are still locked
pub async fn clear_store(store_path: &Path) -> Result<()> {
    if !store_path.exists() {
        return Ok(());
    }

    info!("🗑️  Clearing store directory: {:?}", store_path);

    let mut retries = 3;
    loop {
        match tokio::fs::remove_dir_all(store_path).await {
            Ok(()) => break,
            Err(e) if retries > 0 => {
                warn!("  ⚠️  Failed to clear store (retrying...): {}", e);
                retries -= 1;
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            Err(e) => {
                return Err(e).context("Failed to remove store directory after retries");
            }
        }
    }

    info!("✅ Store directory cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clear_store_removes_directory_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("matrix_store");
        std::fs::create_dir_all(store.join("nested")).unwrap();
        std::fs::write(store.join("nested/state.sqlite3"), b"x").unwrap();

        clear_store(&store).await.unwrap();
        assert!(!store.exists());
        clear_store(&store).await.unwrap();
    }
}
