use serde::{Deserialize, Serialize};

/// Mutations accepted by the conversation store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConversationEvent {
    /// A user turn. Rejected when the text is blank and there are no attachments.
    AppendUserMessage {
        text: String,
        #[serde(default)]
        attachments: Vec<String>,
    },

    /// An empty assistant turn that is about to be streamed into
    AppendAssistantPlaceholder { id: String },

    /// Text received for a streaming assistant turn
    AppendChunk { id: String, chunk: String },

    /// End of a stream; the suffix, if any, is appended before the flag clears
    FinalizeStream {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        error_suffix: Option<String>,
    },

    ClearConversation,
}

/// Notifications published by the conversation controller.
/// The UI drains these each frame to refresh status and request repaints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A user message and its assistant placeholder were appended
    StreamStarted { message_id: String },

    /// A chunk landed in the assistant message; the text is in the store
    ChunkReceived { message_id: String },

    /// The stream delivered every chunk
    StreamCompleted { message_id: String },

    /// Delivery failed; the message carries the error marker
    StreamFailed { message_id: String, error: String },

    /// The stream was cancelled before it finished
    StreamCancelled { message_id: String },

    /// The whole conversation was cleared
    Cleared,
}
