//! Login credentials type.

use std::fmt;

/// Login credentials for the authentication endpoint.
///
/// This type holds the user identifier and the secret typed into the login
/// form. They are consumed by [`Session::login`](crate::Session::login) and
/// never persisted.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use buzon::Credentials;
///
/// let creds = Credentials::new("rafa", "1234");
/// assert_eq!(creds.identifier(), "rafa");
/// ```
#[derive(Clone)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// Neither value is validated; the server decides whether they are
    /// acceptable.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Returns the user identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the secret.
    ///
    /// Use this only when constructing the authentication request.
    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_secret_in_debug() {
        let creds = Credentials::new("rafa", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("rafa"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn credentials_are_not_validated() {
        let creds = Credentials::new("", "");
        assert_eq!(creds.identifier(), "");
        assert_eq!(creds.secret(), "");
    }
}
