use serde::{Deserialize, Serialize};

/// Who authored a turn in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

/// A single turn in the conversation.
///
/// Only `content` and `streaming` change after creation, and only through
/// the conversation store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Opaque resource locators (image URIs, file names)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<String>,
    /// RFC 3339, UTC
    pub timestamp: String,
    #[serde(default)]
    pub streaming: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, attachments: Vec<String>) -> Self {
        Self {
            id: new_message_id(),
            role: Role::User,
            content: text.into(),
            attachments,
            timestamp: now(),
            streaming: false,
        }
    }

    /// An empty assistant message that chunks will be appended to.
    pub fn assistant_placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            content: String::new(),
            attachments: Vec::new(),
            timestamp: now(),
            streaming: true,
        }
    }

    /// True while the assistant has not produced any visible text yet.
    /// The UI shows a typing indicator in this state.
    pub fn is_awaiting_first_chunk(&self) -> bool {
        self.streaming && self.content.is_empty()
    }
}

pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}
