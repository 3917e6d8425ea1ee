//! Conversation controller — wires a stream source into the store.
//!
//! State machine:
//! - `Idle --send--> Streaming`: user message + assistant placeholder are
//!   appended and a stream is started for the trimmed text
//! - `Streaming --complete--> Idle`: the assistant message is finalized
//! - `Streaming --error--> Idle`: finalized with the error marker appended
//! - `Streaming --cancel_active--> Idle`: the stream stops, the partial
//!   message is left as it is
//!
//! At most one stream is active; `send` is ignored while one is running.

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::{
    ChatError, Result,
    config::ChatConfig,
    event::{ChatEvent, ConversationEvent},
    message::{ChatMessage, new_message_id},
};

use crate::driver::StreamHandle;
use crate::event_bus::EventBus;
use crate::ports::{StreamCallbacks, StreamSource};
use crate::store::ConversationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Streaming,
}

/// The stream currently writing into the conversation
struct ActiveStream {
    message_id: String,
    handle: StreamHandle,
}

pub struct ChatController {
    store: Rc<RefCell<ConversationStore>>,
    active: Rc<RefCell<Option<ActiveStream>>>,
    source: Rc<dyn StreamSource>,
    event_bus: EventBus,
    error_marker: String,
}

impl ChatController {
    pub fn new(source: Rc<dyn StreamSource>, event_bus: EventBus, config: &ChatConfig) -> Self {
        Self {
            store: Rc::new(RefCell::new(ConversationStore::new())),
            active: Rc::new(RefCell::new(None)),
            source,
            event_bus,
            error_marker: config.error_marker.clone(),
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.active.borrow().is_some() {
            ControllerState::Streaming
        } else {
            ControllerState::Idle
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.state() == ControllerState::Streaming
    }

    /// Id of the assistant message the active stream writes into
    pub fn active_message_id(&self) -> Option<String> {
        self.active.borrow().as_ref().map(|a| a.message_id.clone())
    }

    /// Copy of the conversation, oldest first
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.store.borrow().messages().to_vec()
    }

    /// Borrow the conversation without copying it.
    /// `f` must not call back into the controller.
    pub fn with_messages<R>(&self, f: impl FnOnce(&[ChatMessage]) -> R) -> R {
        f(self.store.borrow().messages())
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Send a user message and start streaming the reply.
    ///
    /// Returns `false` without touching the conversation when the text is
    /// blank and there are no attachments, or when a stream is active.
    pub fn send(&self, text: &str, attachments: Vec<String>) -> bool {
        if self.is_streaming() {
            log::debug!("Ignoring send while a stream is active");
            return false;
        }

        let text = text.trim();
        if text.is_empty() && attachments.is_empty() {
            log::debug!("Ignoring empty send");
            return false;
        }

        let message_id = new_message_id();
        if let Err(e) = self.begin_turn(text, attachments, &message_id) {
            log::warn!("Send rejected: {}", e);
            return false;
        }
        self.event_bus.emit(ChatEvent::StreamStarted {
            message_id: message_id.clone(),
        });

        let handle = self
            .source
            .start_stream(text, self.stream_callbacks(&message_id));

        // A source may finish synchronously; only a live stream is tracked.
        if self.store.borrow().is_streaming(&message_id) && !handle.is_finished() {
            log::info!("Stream started for message {}", message_id);
            *self.active.borrow_mut() = Some(ActiveStream { message_id, handle });
        }
        true
    }

    /// Stop the active stream, if any. The partial message stays as it is.
    pub fn cancel_active(&self) {
        let active = self.active.borrow_mut().take();
        if let Some(active) = active {
            active.handle.cancel();
            log::info!(
                "Stream for message {} cancelled after {} chunks",
                active.message_id,
                active.handle.delivered()
            );
            self.event_bus.emit(ChatEvent::StreamCancelled {
                message_id: active.message_id,
            });
        }
    }

    /// Cancel any active stream and empty the conversation.
    pub fn clear_all(&self) {
        self.cancel_active();
        if let Err(e) = self.store.borrow_mut().apply(ConversationEvent::ClearConversation) {
            log::error!("Failed to clear conversation: {}", e);
            return;
        }
        log::info!("Conversation cleared");
        self.event_bus.emit(ChatEvent::Cleared);
    }

    fn begin_turn(&self, text: &str, attachments: Vec<String>, message_id: &str) -> Result<()> {
        let mut store = self.store.borrow_mut();
        if store.get(message_id).is_some() {
            return Err(ChatError::DuplicateId(message_id.to_string()));
        }
        store.apply(ConversationEvent::AppendUserMessage {
            text: text.to_string(),
            attachments,
        })?;
        store.apply(ConversationEvent::AppendAssistantPlaceholder {
            id: message_id.to_string(),
        })
    }

    fn stream_callbacks(&self, message_id: &str) -> StreamCallbacks {
        let on_chunk = {
            let store = self.store.clone();
            let bus = self.event_bus.clone();
            let id = message_id.to_string();
            move |chunk: &str| -> Result<()> {
                store.borrow_mut().apply(ConversationEvent::AppendChunk {
                    id: id.clone(),
                    chunk: chunk.to_string(),
                })?;
                bus.emit(ChatEvent::ChunkReceived {
                    message_id: id.clone(),
                });
                Ok(())
            }
        };

        let on_complete = {
            let store = self.store.clone();
            let active = self.active.clone();
            let bus = self.event_bus.clone();
            let id = message_id.to_string();
            move || {
                finish_stream(&store, &active, &id, None);
                log::info!("Stream for message {} complete", id);
                bus.emit(ChatEvent::StreamCompleted { message_id: id });
            }
        };

        let on_error = {
            let store = self.store.clone();
            let active = self.active.clone();
            let bus = self.event_bus.clone();
            let id = message_id.to_string();
            let marker = self.error_marker.clone();
            move |err: ChatError| {
                log::error!("Stream error for message {}: {}", id, err);
                finish_stream(&store, &active, &id, Some(marker));
                bus.emit(ChatEvent::StreamFailed {
                    message_id: id,
                    error: err.to_string(),
                });
            }
        };

        StreamCallbacks::new(on_chunk, on_complete, on_error)
    }
}

impl Drop for ChatController {
    fn drop(&mut self) {
        if let Some(active) = self.active.borrow_mut().take() {
            active.handle.cancel();
        }
    }
}

/// Finalize `id` and release the active handle if it belongs to `id`.
fn finish_stream(
    store: &RefCell<ConversationStore>,
    active: &RefCell<Option<ActiveStream>>,
    id: &str,
    error_suffix: Option<String>,
) {
    if let Err(e) = store.borrow_mut().apply(ConversationEvent::FinalizeStream {
        id: id.to_string(),
        error_suffix,
    }) {
        log::warn!("Could not finalize message {}: {}", id, e);
    }

    let mut active = active.borrow_mut();
    if active.as_ref().is_some_and(|a| a.message_id == id) {
        *active = None;
    }
}
