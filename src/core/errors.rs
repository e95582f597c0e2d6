use thiserror::Error;

/// Unified error type for every fallible operation in the crate.
///
/// Each variant names the pipeline stage that failed, so callers can tell a
/// connection-level failure apart from a rejected status or a body that did
/// not decode.
#[derive(Error, Debug)]
pub enum RestError {
    /// The HTTP exchange itself failed: connect, DNS, TLS, timeout. No
    /// response was received.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but the response was rejected by the validation
    /// policy. Carries the numeric status code and the raw body text.
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    /// The request body could not be encoded. Nothing was sent.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// The (validated, transformed) response body could not be decoded into
    /// the requested type.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// A request URL could not be composed.
    #[error("Invalid request URL: {0}")]
    Routing(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

impl RestError {
    /// Numeric status code, when this error is a rejected response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
