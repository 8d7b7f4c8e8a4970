use thiserror::Error;

/// Failures raised by [`super::DocumentStore`] implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid store path: {0}")]
    InvalidPath(String),

    /// Could not reach the store (connect failure, timeout).
    #[error("store unreachable: {detail}")]
    Unreachable { detail: String, timeout: bool },

    /// The store answered with a non-success status.
    #[error("store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode store response: {0}")]
    Decode(String),

    #[error("store request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL can carry the auth token as a query parameter
        let e = e.without_url();
        if e.is_timeout() || e.is_connect() {
            StoreError::Unreachable {
                timeout: e.is_timeout(),
                detail: e.to_string(),
            }
        } else if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Decode(e.to_string())
    }
}
