//! Refresh command implementation.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::output;
use crate::session;

pub async fn run() -> Result<()> {
    let (api_url, mut manager) = session::require_session()?;

    eprintln!("{}", "Refreshing session...".dimmed());

    let tokens = manager
        .refresh_session()
        .await
        .context("Failed to refresh session; run 'nanit login' to start a new one")?;

    // Save the updated session with the rotated tokens
    session::save_session(&api_url, &tokens).context("Failed to save refreshed session")?;

    output::success("Session refreshed successfully");

    Ok(())
}
