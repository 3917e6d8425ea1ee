//! UI-level state that drives rendering.
//!
//! The conversation itself is read from the controller each frame; this
//! only holds what the UI owns (draft text, pending attachments) plus a
//! status line kept current by draining the controller's EventBus.

use chat_types::config::MAX_ATTACHMENTS_PER_PICK;
use chat_types::event::ChatEvent;

/// What the status line reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamStatus {
    Idle,
    Streaming,
    Stopped,
    Failed(String),
}

/// State visible to UI panels
pub struct UiState {
    /// Draft message in the input box
    pub input_text: String,
    /// Locators attached to the next message
    pub pending_attachments: Vec<String>,
    pub status: StreamStatus,
    pub status_text: String,
    /// Chunks received by the current stream
    pub chunks_received: usize,
}

/// A finished draft, ready for `ChatController::send`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub attachments: Vec<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            pending_attachments: Vec::new(),
            status: StreamStatus::Idle,
            status_text: "Ready".to_string(),
            chunks_received: 0,
        }
    }

    /// Process events from the EventBus and update the status line
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::StreamStarted { .. } => {
                    self.status = StreamStatus::Streaming;
                    self.status_text = "Assistant is typing...".to_string();
                    self.chunks_received = 0;
                }
                ChatEvent::ChunkReceived { .. } => {
                    self.chunks_received += 1;
                    if self.status == StreamStatus::Streaming {
                        self.status_text =
                            format!("Assistant is typing... ({} chunks)", self.chunks_received);
                    }
                }
                ChatEvent::StreamCompleted { .. } => {
                    self.status = StreamStatus::Idle;
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::StreamFailed { error, .. } => {
                    self.status_text = format!("Error: {}", error);
                    self.status = StreamStatus::Failed(error);
                }
                ChatEvent::StreamCancelled { .. } => {
                    self.status = StreamStatus::Stopped;
                    self.status_text = "Stopped".to_string();
                }
                ChatEvent::Cleared => {
                    self.status = StreamStatus::Idle;
                    self.status_text = "Ready".to_string();
                    self.chunks_received = 0;
                }
            }
        }
    }

    /// Attach locators from one pick/drop action.
    /// Takes at most `MAX_ATTACHMENTS_PER_PICK`; returns how many were kept.
    pub fn add_attachments(&mut self, locators: Vec<String>) -> usize {
        let offered = locators.len();
        let before = self.pending_attachments.len();
        self.pending_attachments.extend(
            locators
                .into_iter()
                .filter(|l| !l.trim().is_empty())
                .take(MAX_ATTACHMENTS_PER_PICK),
        );
        let kept = self.pending_attachments.len() - before;
        if kept < offered {
            log::debug!("Attached {} of {} dropped items", kept, offered);
        }
        kept
    }

    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.pending_attachments.len() {
            self.pending_attachments.remove(index);
        }
    }

    /// Send is enabled when there is something to send and no stream is running
    pub fn can_send(&self, is_streaming: bool) -> bool {
        !is_streaming
            && (!self.input_text.trim().is_empty() || !self.pending_attachments.is_empty())
    }

    /// Take the draft, leaving the input empty. `None` when sending is disabled.
    pub fn take_submission(&mut self, is_streaming: bool) -> Option<Submission> {
        if !self.can_send(is_streaming) {
            return None;
        }
        Some(Submission {
            text: std::mem::take(&mut self.input_text),
            attachments: std::mem::take(&mut self.pending_attachments),
        })
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Animated dots for the typing indicator; `time` is seconds since start.
pub fn typing_dots(time: f64) -> &'static str {
    match ((time * 3.0) as u64) % 3 {
        0 => "●  ",
        1 => "●● ",
        _ => "●●●",
    }
}

/// Local `HH:MM` for an RFC 3339 timestamp; empty if it does not parse.
pub fn format_time(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_default()
}
