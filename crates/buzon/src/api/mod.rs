//! HTTP client for the message server.
//!
//! This module provides the JSON-over-HTTP client and the request/response
//! types of the two endpoints the inbox uses.

mod client;
mod endpoints;

pub(crate) use client::ApiClient;
pub(crate) use endpoints::*;
