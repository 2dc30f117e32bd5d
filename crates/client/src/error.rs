use thiserror::Error;

/// Failures raised by the client-side adapters.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable HTTP response.
    #[error("auth service unreachable: {0}")]
    Transport(String),
    /// A response arrived but its body was not one the sign-in service sends.
    #[error("unexpected auth service response: {0}")]
    Decode(String),
    /// Reading or writing the backing file of a session store failed.
    #[error("session store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A session record could not be encoded or decoded.
    #[error("session record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The session store cannot be written in this environment.
    #[error("session store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
