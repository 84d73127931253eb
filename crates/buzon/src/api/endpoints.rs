//! Endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Authentication endpoint, relative to the base URL.
pub const AUTHENTICATE: &str = "usuario/autentica";

/// Received-messages listing endpoint, relative to the base URL.
pub const RECEIVED_MESSAGES: &str = "mensajes/recibidos";

/// Content type sent with every request.
pub const JSON_UTF8: &str = "application/json;charset=UTF-8";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for the authentication endpoint.
#[derive(Serialize)]
pub struct AuthenticateRequest<'a> {
    pub usuario: &'a str,
    pub password: &'a str,
}

/// Response from the authentication endpoint.
#[derive(Debug, Deserialize)]
pub struct AuthenticateResponse {
    pub jwt: String,
}

/// Query parameters for the received-messages listing.
#[derive(Debug, Serialize)]
pub struct ReceivedMessagesQuery {
    #[serde(rename = "pagina")]
    pub page_index: u32,
    #[serde(rename = "mensajesPorPagina")]
    pub page_size: u32,
}
