//! Error types for the buzon library.
//!
//! Every failure of the login → listing → rendering chain surfaces as an
//! [`Error`] variant, so callers can tell a rejected login apart from a
//! broken server, a malformed body or an unreachable host.

use std::fmt;
use thiserror::Error;

/// Maximum number of response body characters kept in a [`ServerError`].
const MAX_BODY_CHARS: usize = 512;

/// The unified error type for buzon operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server rejected the credentials or the token (HTTP 401/403).
    #[error("unauthorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// The server answered with any other status than 200.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// A 200 response whose body is not the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Input validation errors (base URL, token characters).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The HTML template failed to render.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

impl Error {
    /// Returns true if the server refused the credentials or the token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { duration_ms: 0 }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A non-200 response that is not an authorization failure.
#[derive(Debug)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// Response body text, truncated.
    pub body: Option<String>,
}

impl ServerError {
    /// Create a new server error, truncating long bodies.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = body.trim();
        let body = if body.is_empty() {
            None
        } else if body.chars().count() > MAX_BODY_CHARS {
            let cut: String = body.chars().take(MAX_BODY_CHARS).collect();
            Some(format!("{cut}…"))
        } else {
            Some(body.to_string())
        };
        Self { status, body }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref body) = self.body {
            write!(f, ": {}", body)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

/// A response body that could not be decoded.
#[derive(Debug, Error)]
#[error("malformed {endpoint} response: {source}")]
pub struct ParseError {
    /// The endpoint whose response was malformed.
    pub endpoint: &'static str,
    #[source]
    source: serde_json::Error,
}

impl ParseError {
    pub(crate) fn new(endpoint: &'static str, source: serde_json::Error) -> Self {
        Self { endpoint, source }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// The token cannot be sent in an HTTP header.
    #[error("token contains characters not allowed in an HTTP header")]
    Token,

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display_includes_status_and_body() {
        let err = ServerError::new(500, "Internal Server Error\n");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn server_error_without_body() {
        let err = ServerError::new(503, "   ");
        assert!(err.body.is_none());
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn server_error_truncates_long_bodies() {
        let err = ServerError::new(502, "x".repeat(2_000));
        let body = err.body.unwrap();
        assert_eq!(body.chars().count(), MAX_BODY_CHARS + 1);
        assert!(body.ends_with('…'));
    }

    #[test]
    fn unauthorized_is_detected() {
        assert!(Error::Unauthorized { status: 401 }.is_unauthorized());
        assert!(!Error::Server(ServerError::new(500, "")).is_unauthorized());
    }
}
