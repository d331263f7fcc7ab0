//! Session storage for persisting login state.
//!
//! The client libraries define no persistence format; storage across
//! process restarts is this caller's responsibility.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use nanit_core::{AccessToken, ApiUrl, RefreshToken, SessionManager, TokenPair};
use nanit_http::HttpTransport;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    api_url: ApiUrl,
    access_token: String,
    refresh_token: String,
    saved_at: DateTime<Utc>,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "nanit").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save the current token pair to disk.
pub fn save_session(api_url: &ApiUrl, tokens: &TokenPair) -> Result<()> {
    save_session_to(&session_path()?, api_url, tokens)
}

fn save_session_to(path: &Path, api_url: &ApiUrl, tokens: &TokenPair) -> Result<()> {
    let stored = StoredSession {
        api_url: api_url.clone(),
        access_token: tokens.access().as_str().to_string(),
        refresh_token: tokens.refresh().as_str().to_string(),
        saved_at: Utc::now(),
    };

    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

/// Load a session manager from disk, if one was saved.
pub fn load_session() -> Result<Option<(ApiUrl, SessionManager<HttpTransport>)>> {
    let path = session_path()?;
    load_session_from(&path)
}

fn load_session_from(path: &Path) -> Result<Option<(ApiUrl, SessionManager<HttpTransport>)>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    tracing::debug!(saved_at = %stored.saved_at, "Loaded stored session");

    let tokens = TokenPair::new(
        AccessToken::new(stored.access_token),
        RefreshToken::new(stored.refresh_token),
    );
    let transport = HttpTransport::with_base_url(stored.api_url.clone());

    Ok(Some((
        stored.api_url,
        SessionManager::with_tokens(transport, tokens),
    )))
}

/// Load a session manager, failing with a login hint when none is stored.
pub fn require_session() -> Result<(ApiUrl, SessionManager<HttpTransport>)> {
    load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'nanit login' first.")
}

/// Clear the stored session.
pub fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}
