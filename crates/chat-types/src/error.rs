use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message has no text and no attachments")]
    EmptyMessage,

    #[error("Duplicate message id: {0}")]
    DuplicateId(String),

    #[error("Unknown message: {0}")]
    UnknownMessage(String),

    #[error("Message is not streaming: {0}")]
    NotStreaming(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
