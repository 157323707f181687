use thiserror::Error;

/// A failed remote call.
///
/// Callers surface the Display text; they do not branch on the variant.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request URL could not be built from the base URL
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Connection, timeout or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{status} {message}")]
    Status { status: u16, message: String },

    /// Success body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
