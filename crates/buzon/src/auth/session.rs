//! Session management for authenticated inbox operations.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::api::{
    AUTHENTICATE, ApiClient, AuthenticateRequest, AuthenticateResponse, RECEIVED_MESSAGES,
    ReceivedMessagesQuery,
};
use crate::config::{ClientConfig, Page};
use crate::error::Error;
use crate::message::Message;
use crate::types::BaseUrl;

use super::credentials::Credentials;
use super::tokens::AccessToken;

/// A session holding the token issued by the authentication endpoint.
///
/// Listing messages requires a `Session`. Sessions are obtained via
/// [`Session::login()`]; the token is never refreshed or stored.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`) and are safe
/// to share across threads.
///
/// # Example
///
/// ```no_run
/// use buzon::{ClientConfig, Credentials, Session};
///
/// # async fn example() -> Result<(), buzon::Error> {
/// let config = ClientConfig::default();
/// let session = Session::login(&config, Credentials::new("rafa", "1234")).await?;
///
/// for message in session.received_messages(config.page).await? {
///     println!("{}: {}", message.id, message.subject);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    identifier: Option<String>,
    client: ApiClient,
    token: AccessToken,
}

impl Session {
    /// Authenticate against the server and create a new session.
    ///
    /// Sends `{"usuario", "password"}` to the authentication endpoint and
    /// keeps the `jwt` field of the 200 response.
    ///
    /// # Errors
    ///
    /// [`Error::Unauthorized`] if the server refuses the credentials,
    /// [`Error::Server`] for any other non-200 status, [`Error::Parse`] if
    /// the response has no `jwt`, and [`Error::Transport`] if the server
    /// is unreachable.
    #[instrument(skip_all, fields(base = %config.base_url, identifier = %credentials.identifier()))]
    pub async fn login(config: &ClientConfig, credentials: Credentials) -> Result<Self, Error> {
        info!("Authenticating");

        let client = ApiClient::new(config.base_url.clone(), config.timeout())?;

        let request = AuthenticateRequest {
            usuario: credentials.identifier(),
            password: credentials.secret(),
        };

        let response: AuthenticateResponse = client.post_json(AUTHENTICATE, &request).await?;

        debug!("Session created successfully");

        Ok(Self {
            inner: Arc::new(SessionInner {
                identifier: Some(credentials.identifier().to_string()),
                client,
                token: AccessToken::new(response.jwt),
            }),
        })
    }

    /// Create a session around a token obtained elsewhere.
    ///
    /// No request is made; the caller is responsible for the token being
    /// valid.
    pub fn from_token(config: &ClientConfig, token: impl Into<String>) -> Result<Self, Error> {
        let client = ApiClient::new(config.base_url.clone(), config.timeout())?;

        Ok(Self {
            inner: Arc::new(SessionInner {
                identifier: None,
                client,
                token: AccessToken::new(token),
            }),
        })
    }

    /// Returns the identifier used to log in, if the session came from a login.
    pub fn identifier(&self) -> Option<&str> {
        self.inner.identifier.as_deref()
    }

    /// Returns the base URL of the server.
    pub fn base_url(&self) -> &BaseUrl {
        self.inner.client.base()
    }

    /// Export the token.
    ///
    /// # Security
    ///
    /// Handle the returned token securely. It grants access to the inbox.
    pub fn export_token(&self) -> String {
        self.inner.token.as_str().to_string()
    }

    /// Fetch one page of received messages.
    ///
    /// Messages are returned in server order.
    ///
    /// # Errors
    ///
    /// [`Error::Unauthorized`] if the server rejects the token; otherwise
    /// as for [`Session::login`].
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn received_messages(&self, page: Page) -> Result<Vec<Message>, Error> {
        debug!("Listing received messages");

        let query = ReceivedMessagesQuery {
            page_index: page.index,
            page_size: page.size,
        };

        let messages: Vec<Message> = self
            .inner
            .client
            .get_authed(RECEIVED_MESSAGES, &query, &self.inner.token)
            .await?;

        debug!(count = messages.len(), "Received messages");
        Ok(messages)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("identifier", &self.inner.identifier)
            .field("base_url", self.inner.client.base())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
