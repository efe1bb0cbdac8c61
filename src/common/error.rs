//! Error taxonomy for the solicitante endpoints.
//!
//! Every variant is recoverable: the widget reports it and waits for the next
//! user action.

/// Failure of a single search or detail request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Connection refused, DNS failure, broken body stream.
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not the JSON shape we expect.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Well-formed JSON carrying an `error` field.
    #[error("{0}")]
    Server(String),
}

impl LookupError {
    pub fn is_server(&self) -> bool {
        matches!(self, LookupError::Server(_))
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Decode(err.to_string())
    }
}
