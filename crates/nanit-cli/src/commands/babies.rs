//! Babies listing command implementation.

use anyhow::{Context, Result};

use crate::output;
use crate::session;

pub async fn run() -> Result<()> {
    let (_, manager) = session::require_session()?;

    let babies = manager.babies().await.context("Failed to list babies")?;
    output::json_pretty(&babies)
}
