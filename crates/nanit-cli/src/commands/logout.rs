//! Logout command implementation.

use anyhow::{Context, Result};

use crate::output;
use crate::session;

pub async fn run() -> Result<()> {
    session::clear_session().context("Failed to clear session")?;
    output::success("Logged out");

    Ok(())
}
