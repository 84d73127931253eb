//! Inbox command implementation.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use colored::Colorize;
use tracing::debug;

use buzon::{DateFormat, Inbox, Page, Session, render};

use crate::output;

use super::{CredentialArgs, ServerArgs};

/// How the fetched messages are written.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Format {
    /// The table fragment alone
    Html,
    /// A full HTML document with the table inside its container
    Page,
    /// One JSON object per message
    Json,
}

#[derive(Args)]
pub struct InboxArgs {
    /// User identifier
    #[arg(long, env = "BUZON_USUARIO", required_unless_present = "token")]
    pub usuario: Option<String>,

    /// Password
    #[arg(
        long,
        env = "BUZON_PASSWORD",
        hide_env_values = true,
        required_unless_present = "token"
    )]
    pub password: Option<String>,

    /// Use an existing token instead of logging in (takes precedence)
    #[arg(long, env = "BUZON_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(flatten)]
    pub server: ServerArgs,

    /// Zero-based page index
    #[arg(long, env = "BUZON_PAGE", default_value_t = 0)]
    pub page: u32,

    /// Messages per page
    #[arg(long, env = "BUZON_PAGE_SIZE", default_value_t = buzon::config::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Show timestamps in UTC instead of local time
    #[arg(long)]
    pub utc: bool,
}

impl InboxArgs {
    fn credential_args(&self) -> Option<CredentialArgs> {
        match (&self.usuario, &self.password) {
            (Some(usuario), Some(password)) => Some(CredentialArgs {
                usuario: usuario.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Debug for InboxArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |secret: &Option<String>| secret.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("InboxArgs")
            .field("usuario", &self.usuario)
            .field("password", &redacted(&self.password))
            .field("token", &redacted(&self.token))
            .field("server", &self.server)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("format", &self.format)
            .field("output", &self.output)
            .field("utc", &self.utc)
            .finish()
    }
}

pub async fn run(args: InboxArgs) -> Result<()> {
    let date_format = if args.utc {
        DateFormat::utc()
    } else {
        DateFormat::default()
    };

    let config = args
        .server
        .config()?
        .with_page(Page::new(args.page, args.page_size))
        .with_date_format(date_format);

    let inbox = Inbox::new(config);
    debug!(
        page = args.page,
        page_size = args.page_size,
        format = ?args.format,
        "Fetching inbox"
    );

    let session = match (&args.token, args.credential_args()) {
        (Some(token), _) => Session::from_token(inbox.config(), token.as_str())?,
        (None, Some(creds)) => {
            eprintln!("{}", "Logging in...".dimmed());
            Session::login(inbox.config(), creds.credentials())
                .await
                .context("Failed to login")?
        }
        (None, None) => bail!("Either --token or --usuario and --password are required"),
    };

    let messages = inbox
        .fetch_with(&session)
        .await
        .context("Failed to list received messages")?;

    if messages.is_empty() {
        eprintln!("{}", "No messages found.".dimmed());
    }

    let rendered = match args.format {
        Format::Json => output::json_lines(&messages)?,
        Format::Html => inbox.render(&messages).context("Failed to render table")?,
        Format::Page => {
            let table = inbox.render(&messages).context("Failed to render table")?;
            render::page_document(&table).context("Failed to render page")?
        }
    };

    output::write(&rendered, args.output.as_deref())?;

    if let Some(path) = &args.output {
        output::success(&format!(
            "Wrote {} messages to {}",
            messages.len(),
            path.display()
        ));
    }

    Ok(())
}
