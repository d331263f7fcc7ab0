//! Stream and control-channel URL commands.

use anyhow::{Context, Result};
use clap::Args;

use nanit_core::BabyUid;

use crate::session;

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Device UID to build the URL for
    #[arg(long)]
    pub baby: BabyUid,
}

pub async fn run_stream_url(args: UrlArgs) -> Result<()> {
    let (_, manager) = session::require_session()?;

    // Embeds the current access token: regenerate after every refresh.
    let url = manager
        .stream_url(&args.baby)
        .context("Failed to build stream URL")?;
    println!("{url}");

    Ok(())
}

pub async fn run_ws_url(args: UrlArgs) -> Result<()> {
    // Token-free, so no stored session is needed.
    println!("{}", nanit_core::media::websocket_url(&args.baby));

    Ok(())
}
