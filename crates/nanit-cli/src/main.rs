//! nanit - CLI tool for exploring the Nanit cloud API.
//!
//! This is a thin wrapper over the nanit client libraries, intended for
//! manual exploration and debugging against the cloud API.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Login(args) => commands::login::run(args).await,
        Commands::Refresh => commands::refresh::run().await,
        Commands::Babies => commands::babies::run().await,
        Commands::Messages(args) => commands::messages::run(args).await,
        Commands::Events(args) => commands::events::run(args).await,
        Commands::StreamUrl(args) => commands::urls::run_stream_url(args).await,
        Commands::WsUrl(args) => commands::urls::run_ws_url(args).await,
        Commands::Logout => commands::logout::run().await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
