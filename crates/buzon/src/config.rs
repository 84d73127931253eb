//! Client configuration.
//!
//! Everything the browser script hard-coded (server address, page index,
//! page size) plus the request timeout and how timestamps are shown.
//!
//! ```
//! use buzon::{ClientConfig, Page};
//!
//! let config = ClientConfig::default().with_page(Page::new(2, 25));
//! assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
//! assert_eq!(config.page.size, 25);
//! ```

use std::fmt::Write as _;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};
use crate::types::BaseUrl;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_TIMEOUT_MS: u64 = DEFAULT_TIMEOUT_SECS * 1000;

/// Default number of messages per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Configuration shared by the login and listing calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the message server.
    pub base_url: BaseUrl,
    /// Page of received messages to request.
    pub page: Page,
    /// Per-request timeout in milliseconds. Zero disables the timeout.
    pub timeout_ms: u64,
    /// How timestamps are rendered in the table.
    pub date_format: DateFormat,
}

impl ClientConfig {
    /// Create a configuration for the given server with default settings.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    /// Set the per-request timeout. A zero duration disables it.
    ///
    /// Sub-millisecond parts are rounded up so a short timeout never
    /// becomes zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_millis();
        let rounded = if timeout > Duration::from_millis(millis as u64) {
            millis + 1
        } else {
            millis
        };
        self.timeout_ms = u64::try_from(rounded).unwrap_or(u64::MAX);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout_ms = 0;
        self
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Returns the per-request timeout, or `None` when it is disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            page: Page::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            date_format: DateFormat::default(),
        }
    }
}

/// A page selection for the received-messages listing.
///
/// Sent as `pagina` and `mensajesPorPagina`. Neither value is checked
/// locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Zero-based page index.
    pub index: u32,
    /// Messages per page.
    pub size: u32,
}

impl Page {
    pub fn new(index: u32, size: u32) -> Self {
        Self { index, size }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Time zone used to show message timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The zone of the machine running the client.
    #[default]
    Local,
    Utc,
}

/// Date and time patterns for message timestamps.
///
/// A timestamp renders as `<date> <time>`, both strftime patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormat {
    pub zone: Zone,
    pub date: String,
    pub time: String,
}

impl DateFormat {
    /// Create a format, rejecting malformed strftime patterns.
    pub fn new(
        zone: Zone,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Result<Self, Error> {
        let format = Self {
            zone,
            date: date.into(),
            time: time.into(),
        };
        check_pattern(&format.date)?;
        check_pattern(&format.time)?;
        Ok(format)
    }

    /// The default patterns, shown in UTC.
    pub fn utc() -> Self {
        Self {
            zone: Zone::Utc,
            ..Self::default()
        }
    }

    /// Format milliseconds since the Unix epoch.
    ///
    /// Out-of-range values and unusable patterns fall back to the raw number.
    pub fn format_millis(&self, millis: i64) -> String {
        let Some(utc) = DateTime::<Utc>::from_timestamp_millis(millis) else {
            return millis.to_string();
        };
        let formatted = match self.zone {
            Zone::Utc => self.apply(&utc),
            Zone::Local => self.apply(&utc.with_timezone(&Local)),
        };
        formatted.unwrap_or_else(|| millis.to_string())
    }

    fn apply<Tz>(&self, at: &DateTime<Tz>) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut out = String::new();
        write!(out, "{} {}", at.format(&self.date), at.format(&self.time)).ok()?;
        Some(out)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            zone: Zone::Local,
            date: "%d/%m/%Y".to_string(),
            time: "%H:%M:%S".to_string(),
        }
    }
}

fn check_pattern(pattern: &str) -> Result<(), Error> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(InvalidInputError::Other {
            message: format!("invalid date pattern '{pattern}'"),
        }
        .into());
    }
    Ok(())
}
