//! Login command implementation.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use nanit_core::types::PRODUCTION_API_ROOT;
use nanit_core::{ApiUrl, Credentials, SessionManager};
use nanit_http::HttpTransport;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// API base URL
    #[arg(long, default_value = PRODUCTION_API_ROOT)]
    pub api_url: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let api_url = ApiUrl::new(&args.api_url).context("Invalid API URL")?;
    let credentials = Credentials::new(&args.email, &args.password);

    let transport = HttpTransport::with_base_url(api_url.clone());
    let mut manager = SessionManager::new(transport);

    eprintln!("{}", "Requesting MFA challenge...".dimmed());
    let mfa_token = manager
        .initiate_login(&credentials)
        .await
        .context("Failed to initiate login")?;

    let code = prompt_mfa_code()?;
    let tokens = manager
        .complete_login(&credentials, &mfa_token, code.trim())
        .await
        .context("Failed to complete login")?;

    // Save session
    session::save_session(&api_url, &tokens).context("Failed to save session")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("Email", &args.email);
    output::field("API", api_url.as_str());

    Ok(())
}

/// Prompt for the one-time code the server emailed to the account.
fn prompt_mfa_code() -> Result<String> {
    eprint!("{} ", "Enter the code sent to your email:".bold());
    io::stderr().flush().context("Failed to flush prompt")?;

    let mut code = String::new();
    io::stdin()
        .lock()
        .read_line(&mut code)
        .context("Failed to read MFA code")?;

    Ok(code)
}
