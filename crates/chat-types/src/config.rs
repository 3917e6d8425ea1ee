use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ChatError, Result};

/// Marker appended to an assistant message whose stream failed.
pub const DEFAULT_ERROR_MARKER: &str = "\n\n*[Stream error occurred]*";

/// Hard ceiling on chunk length, in characters.
pub const MAX_CHUNK_CHARS: usize = 8;

/// Upper bound on attachments taken from a single pick/drop action.
pub const MAX_ATTACHMENTS_PER_PICK: usize = 4;

/// Top-level chat configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub stream: StreamConfig,
    pub error_marker: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            stream: StreamConfig::default(),
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ChatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.stream.validate()
    }
}

/// Timing and chunking of the local response stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Delay before the first chunk, standing in for network latency
    pub initial_delay_ms: u64,
    /// Pause after each delivered chunk
    pub chunk_interval_ms: u64,
    /// Longest chunk emitted for a run without whitespace, 1..=MAX_CHUNK_CHARS
    pub max_chunk_chars: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 400,
            chunk_interval_ms: 30,
            max_chunk_chars: MAX_CHUNK_CHARS,
        }
    }
}

impl StreamConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn chunk_interval(&self) -> Duration {
        Duration::from_millis(self.chunk_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CHUNK_CHARS).contains(&self.max_chunk_chars) {
            return Err(ChatError::Config(format!(
                "max_chunk_chars must be between 1 and {}, got {}",
                MAX_CHUNK_CHARS, self.max_chunk_chars
            )));
        }
        Ok(())
    }
}
