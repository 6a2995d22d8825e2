use crate::resource::endpoints::Operation;
use thiserror::Error;

/// Failure of a single backend call.
///
/// Every variant is caught where the call was made and turned into a
/// notification; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("{resource} has no {operation} endpoint")]
    MissingEndpoint {
        resource: &'static str,
        operation: Operation,
    },

    #[error("no record is bound to the form")]
    Unbound,
}

impl ClientError {
    /// Message reported by the backend, if it sent a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Server { message, .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
