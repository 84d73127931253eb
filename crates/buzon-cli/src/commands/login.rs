//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::debug;

use buzon::Session;

use crate::output;

use super::{CredentialArgs, ServerArgs};

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    /// Print the issued token
    #[arg(long)]
    pub show_token: bool,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let config = args.server.config()?;
    debug!(base = %config.base_url, "Checking credentials");

    eprintln!("{}", "Logging in...".dimmed());

    let session = Session::login(&config, args.credentials.credentials())
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    output::field("Usuario", &args.credentials.usuario);
    output::field("Server", session.base_url().as_str());
    if args.show_token {
        output::field("Token", &session.export_token());
    }

    Ok(())
}
