//! Messages listing command implementation.

use anyhow::{Context, Result};
use clap::Args;

use nanit_core::BabyUid;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct MessagesArgs {
    /// Device UID to list messages for
    #[arg(long)]
    pub baby: BabyUid,

    /// Maximum number of messages to return
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(args: MessagesArgs) -> Result<()> {
    let (_, manager) = session::require_session()?;

    let messages = manager
        .messages(&args.baby, args.limit)
        .await
        .context("Failed to list messages")?;
    output::json_pretty(&messages)
}
