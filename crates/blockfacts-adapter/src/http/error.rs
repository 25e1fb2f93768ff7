/*
[INPUT]:  Error sources (HTTP, JSON decoding, URL building, headers, WebSocket)
[OUTPUT]: Structured error type shared by the REST and streaming clients
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the BlockFacts adapter
#[derive(Error, Debug)]
pub enum BlockfactsError {
    /// HTTP request failed (connect, send, or body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body or outbound payload was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Credential or override header cannot be sent as an HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// WebSocket protocol or transport error
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Send attempted before `subscribe` opened a connection
    #[error("WebSocket not connected, call subscribe first")]
    NotConnected,

    /// Connection task ended while a frame was being queued
    #[error("WebSocket send channel closed")]
    ChannelClosed,

    /// Client configuration rejected before any request (e.g. a non-http base URL)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlockfactsError {
    /// Check if the error came from the network or the stream connection
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            BlockfactsError::Http(_)
                | BlockfactsError::WebSocket(_)
                | BlockfactsError::NotConnected
                | BlockfactsError::ChannelClosed
        )
    }
}

/// Result type alias for BlockFacts operations
pub type Result<T> = std::result::Result<T, BlockfactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_errors() {
        assert!(BlockfactsError::NotConnected.is_connection_error());
        assert!(BlockfactsError::ChannelClosed.is_connection_error());
        assert!(!BlockfactsError::InvalidHeader("X-API-KEY".to_string()).is_connection_error());
    }

    #[test]
    fn test_decode_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: BlockfactsError = err.into();
        assert!(matches!(err, BlockfactsError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_not_connected_message() {
        assert_eq!(
            BlockfactsError::NotConnected.to_string(),
            "WebSocket not connected, call subscribe first"
        );
    }
}
