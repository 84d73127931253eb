//! Subcommand implementations.

pub mod inbox;
pub mod login;

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use tracing::warn;

use buzon::{BaseUrl, ClientConfig, Credentials};

/// Where the message server lives.
#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Message server base URL
    #[arg(long, env = "BUZON_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Accept a plain http:// base URL for hosts other than localhost
    #[arg(long, env = "BUZON_ALLOW_HTTP")]
    pub allow_http: bool,

    /// Request timeout in seconds, fractions allowed (0 disables it)
    #[arg(long, default_value_t = buzon::config::DEFAULT_TIMEOUT_SECS as f64)]
    pub timeout: f64,
}

impl ServerArgs {
    pub fn config(&self) -> Result<ClientConfig> {
        let base = if self.allow_http {
            BaseUrl::new_allow_http(&self.base_url)
        } else {
            BaseUrl::new(&self.base_url)
        }
        .context("Invalid base URL")?;

        if base.is_plain_http() && self.allow_http {
            warn!(base = %base, "Sending credentials over plain HTTP");
        }

        let timeout = Duration::try_from_secs_f64(self.timeout)
            .with_context(|| format!("Invalid timeout '{}'", self.timeout))?;
        Ok(ClientConfig::new(base).with_timeout(timeout))
    }
}

/// The two login form fields.
#[derive(Args)]
pub struct CredentialArgs {
    /// User identifier
    #[arg(long, env = "BUZON_USUARIO")]
    pub usuario: String,

    /// Password
    #[arg(long, env = "BUZON_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl CredentialArgs {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.usuario, &self.password)
    }
}

impl fmt::Debug for CredentialArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialArgs")
            .field("usuario", &self.usuario)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(timeout: f64) -> ServerArgs {
        ServerArgs {
            base_url: "http://localhost:8080".to_string(),
            allow_http: false,
            timeout,
        }
    }

    #[test]
    fn credential_args_debug_hides_password() {
        let args = CredentialArgs {
            usuario: "rafa".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", args);
        assert!(debug.contains("rafa"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn fractional_timeout_is_kept() {
        let config = server(0.5).config().unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        assert_eq!(server(0.0).config().unwrap().timeout(), None);
    }

    #[test]
    fn negative_timeout_is_rejected() {
        let err = server(-1.0).config().unwrap_err();
        assert!(format!("{err:#}").contains("Invalid timeout"));
    }

    #[test]
    fn lan_http_needs_allow_http() {
        let mut args = server(30.0);
        args.base_url = "http://192.168.1.10:8080".to_string();
        assert!(args.config().is_err());

        args.allow_http = true;
        let config = args.config().unwrap();
        assert_eq!(config.base_url.host(), Some("192.168.1.10"));
    }
}
