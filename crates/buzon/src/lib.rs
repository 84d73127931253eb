//! buzon - received-messages inbox client
//!
//! Logs in to a message server with a user identifier and password, lists
//! a page of received messages with the returned JWT, and renders them as
//! an HTML table. All authenticated operations flow through a [`Session`].
//!
//! # Example
//!
//! ```no_run
//! use buzon::{ClientConfig, Credentials, Inbox};
//!
//! # async fn example() -> Result<(), buzon::Error> {
//! let inbox = Inbox::new(ClientConfig::default());
//! let html = inbox.fetch_and_render(Credentials::new("rafa", "1234")).await?;
//! println!("{html}");
//! # Ok(())
//! # }
//! ```

mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod inbox;
pub mod message;
pub mod render;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session};
pub use config::{ClientConfig, DateFormat, Page, Zone};
pub use error::Error;
pub use inbox::Inbox;
pub use message::Message;
pub use types::BaseUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
