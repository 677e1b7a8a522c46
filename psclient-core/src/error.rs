use thiserror::Error;

/// Failures reported by the client's collaborators.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("login server request failed: {0}")]
    Transport(String),
    #[error("login server sent malformed data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl ClientError {
    /// Message shown inline in a popup form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(message) | Self::Storage(message) => message.clone(),
            Self::Decode(_) => "The login server sent an invalid response.".to_string(),
        }
    }
}
