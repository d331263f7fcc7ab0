//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    events::EventsArgs, login::LoginArgs, messages::MessagesArgs, urls::UrlArgs,
};

/// Nanit cloud API exploration tool.
#[derive(Parser, Debug)]
#[command(name = "nanit")]
#[command(author, version = env!("NANIT_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with email, password and an emailed MFA code
    Login(LoginArgs),
    /// Rotate the stored access/refresh token pair
    Refresh,
    /// List the devices on the account
    Babies,
    /// List messages for a device
    Messages(MessagesArgs),
    /// List events for a device
    Events(EventsArgs),
    /// Print the streaming-media URL for a device
    StreamUrl(UrlArgs),
    /// Print the real-time control-channel URL for a device
    WsUrl(UrlArgs),
    /// Remove the stored session
    Logout,
}
