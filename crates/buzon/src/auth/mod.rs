//! Authentication types and session management.
//!
//! Listing messages requires a [`Session`], obtained by logging in with
//! [`Credentials`].

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::Session;
pub(crate) use tokens::AccessToken;
