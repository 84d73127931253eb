//! Received message type.

use serde::{Deserialize, Serialize};

/// A message from the received-messages listing.
///
/// Only the fields the inbox shows are kept; anything else the server
/// sends is ignored. Serializes back to the server's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned message id.
    pub id: i64,

    /// Subject line.
    #[serde(rename = "asunto")]
    pub subject: String,

    /// Send time in milliseconds since the Unix epoch.
    #[serde(rename = "fecha")]
    pub sent_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_server_fields_and_ignores_the_rest() {
        let messages: Vec<Message> = serde_json::from_value(json!([
            {"id": 7, "asunto": "Hola", "fecha": 1000, "cuerpo": "...", "emisor": {"id": 2}}
        ]))
        .unwrap();
        assert_eq!(
            messages,
            vec![Message {
                id: 7,
                subject: "Hola".to_string(),
                sent_at: 1000,
            }]
        );
    }

    #[test]
    fn missing_subject_is_an_error() {
        assert!(serde_json::from_value::<Message>(json!({"id": 1, "fecha": 0})).is_err());
    }
}
