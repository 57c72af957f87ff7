use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortalError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Request rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Element not found on page: {0}")]
    MissingElement(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PortalError {
    /// Text shown to the user. Only a server-provided rejection reason is surfaced;
    /// every other failure collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            PortalError::Rejected(Some(message)) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, PortalError::Transport(_) | PortalError::Decode(_))
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Decode(err.to_string())
    }
}
