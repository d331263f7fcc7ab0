//! Events listing command implementation.

use anyhow::{Context, Result};
use clap::Args;

use nanit_core::BabyUid;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Device UID to list events for
    #[arg(long)]
    pub baby: BabyUid,

    /// Maximum number of events to return
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(args: EventsArgs) -> Result<()> {
    let (_, manager) = session::require_session()?;

    let events = manager
        .events(&args.baby, args.limit)
        .await
        .context("Failed to list events")?;
    output::json_pretty(&events)
}
