//! Port traits — the boundary between the pipeline and its environment.
//!
//! The core only knows how to schedule work and where responses come from
//! through these traits. Browser adapters live in `chat-platform`; tests
//! plug in a manual clock.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use chat_types::{ChatError, Result};

use crate::driver::StreamHandle;

// ─── Scheduler Port ──────────────────────────────────────────

/// Single-threaded task and timer facility (an event loop).
pub trait SchedulerPort {
    /// Run `task` on the local event loop
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);

    /// A future that resolves once `duration` has elapsed.
    /// Dropping it before then must release the underlying timer.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

// ─── Stream Source Port ──────────────────────────────────────

/// Observer side of a response stream.
///
/// `on_complete` and `on_error` are `FnOnce`: a stream ends at most once.
pub struct StreamCallbacks {
    pub on_chunk: Box<dyn FnMut(&str) -> Result<()>>,
    pub on_complete: Box<dyn FnOnce()>,
    pub on_error: Box<dyn FnOnce(ChatError)>,
}

impl StreamCallbacks {
    pub fn new(
        on_chunk: impl FnMut(&str) -> Result<()> + 'static,
        on_complete: impl FnOnce() + 'static,
        on_error: impl FnOnce(ChatError) + 'static,
    ) -> Self {
        Self {
            on_chunk: Box::new(on_chunk),
            on_complete: Box::new(on_complete),
            on_error: Box::new(on_error),
        }
    }
}

/// Anything that can answer a user message with a stream of text.
///
/// The local echo producer implements this today; a networked
/// (server-sent events) source must honour the same callbacks and the
/// same cancel semantics.
pub trait StreamSource {
    fn start_stream(&self, input: &str, callbacks: StreamCallbacks) -> StreamHandle;
}
