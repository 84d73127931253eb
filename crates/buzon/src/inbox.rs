//! Login, listing and rendering chained together.

use tracing::{info, instrument};

use crate::Result;
use crate::auth::{Credentials, Session};
use crate::config::ClientConfig;
use crate::message::Message;
use crate::render;

/// Runs the login → listing → rendering chain for one configuration.
///
/// Every call logs in again; nothing is shared between calls, so two
/// overlapping calls are independent chains.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    config: ClientConfig,
}

impl Inbox {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Log in and fetch the configured page of received messages.
    ///
    /// The listing request is only sent once the login has succeeded.
    #[instrument(skip_all, fields(identifier = %credentials.identifier()))]
    pub async fn fetch(&self, credentials: Credentials) -> Result<Vec<Message>> {
        let session = Session::login(&self.config, credentials).await?;
        self.fetch_with(&session).await
    }

    /// Fetch the configured page with an existing session.
    pub async fn fetch_with(&self, session: &Session) -> Result<Vec<Message>> {
        let messages = session.received_messages(self.config.page).await?;
        info!(count = messages.len(), page = self.config.page.index, "Fetched inbox page");
        Ok(messages)
    }

    /// Log in, fetch, and render the messages as an HTML table fragment.
    pub async fn fetch_and_render(&self, credentials: Credentials) -> Result<String> {
        let messages = self.fetch(credentials).await?;
        self.render(&messages)
    }

    /// Render messages with the configured date format.
    pub fn render(&self, messages: &[Message]) -> Result<String> {
        render::messages_table(messages, &self.config.date_format)
    }
}
