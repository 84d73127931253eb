//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{inbox::InboxArgs, login::LoginArgs};

/// Log in to a message server and show the received messages.
#[derive(Parser, Debug)]
#[command(name = "buzon")]
#[command(author, version, about, long_about = None)]
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
    /// Check credentials against the authentication endpoint
    Login(LoginArgs),

    /// Log in and render a page of received messages
    Inbox(InboxArgs),
}
