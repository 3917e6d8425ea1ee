//! Conversation store — the ordered message log.
//!
//! All mutation goes through [`ConversationStore::apply`]. A rejected event
//! returns an error and leaves the log untouched.

use chat_types::{
    ChatError, Result,
    event::ConversationEvent,
    message::ChatMessage,
};

#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ConversationEvent) -> Result<()> {
        match event {
            ConversationEvent::AppendUserMessage { text, attachments } => {
                if text.trim().is_empty() && attachments.is_empty() {
                    return Err(ChatError::EmptyMessage);
                }
                self.messages.push(ChatMessage::user(text, attachments));
            }
            ConversationEvent::AppendAssistantPlaceholder { id } => {
                if self.get(&id).is_some() {
                    return Err(ChatError::DuplicateId(id));
                }
                self.messages.push(ChatMessage::assistant_placeholder(id));
            }
            ConversationEvent::AppendChunk { id, chunk } => {
                self.streaming_mut(&id)?.content.push_str(&chunk);
            }
            ConversationEvent::FinalizeStream { id, error_suffix } => {
                let msg = self.streaming_mut(&id)?;
                if let Some(suffix) = error_suffix {
                    msg.content.push_str(&suffix);
                }
                msg.streaming = false;
            }
            ConversationEvent::ClearConversation => {
                self.messages.clear();
            }
        }
        Ok(())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn get(&self, id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn is_streaming(&self, id: &str) -> bool {
        self.get(id).is_some_and(|m| m.streaming)
    }

    /// The most recent message still receiving chunks
    pub fn streaming_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.streaming)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn streaming_mut(&mut self, id: &str) -> Result<&mut ChatMessage> {
        let msg = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ChatError::UnknownMessage(id.to_string()))?;
        if !msg.streaming {
            return Err(ChatError::NotStreaming(id.to_string()));
        }
        Ok(msg)
    }
}
