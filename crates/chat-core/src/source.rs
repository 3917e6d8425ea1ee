//! Local echo producer: chunk generator + stream driver behind `StreamSource`.

use std::rc::Rc;

use chat_types::config::{StreamConfig, MAX_CHUNK_CHARS};

use crate::chunker;
use crate::driver::{self, StreamHandle, StreamTiming};
use crate::ports::{SchedulerPort, StreamCallbacks, StreamSource};

pub struct EchoStreamSource {
    scheduler: Rc<dyn SchedulerPort>,
    config: StreamConfig,
}

impl EchoStreamSource {
    pub fn new(scheduler: Rc<dyn SchedulerPort>, config: StreamConfig) -> Self {
        Self { scheduler, config }
    }
}

impl StreamSource for EchoStreamSource {
    fn start_stream(&self, input: &str, callbacks: StreamCallbacks) -> StreamHandle {
        let response = chunker::format_echo(input);
        // Unvalidated configs still never exceed the ceiling
        let max_chars = self.config.max_chunk_chars.min(MAX_CHUNK_CHARS);
        let chunks = chunker::chunkify(&response, max_chars);
        log::debug!(
            "Echo stream: {} chars in {} chunks",
            response.chars().count(),
            chunks.len()
        );

        driver::start(
            self.scheduler.clone(),
            StreamTiming::from(&self.config),
            chunks,
            callbacks,
        )
    }
}
