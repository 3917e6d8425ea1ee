//! Stream driver — delivers a prepared chunk sequence over time.
//!
//! One delivery loop runs as a single local task:
//! 1. wait the initial delay
//! 2. hand the next chunk to `on_chunk`, then wait the chunk interval
//! 3. repeat until the chunks run out, then call `on_complete`
//!
//! If `on_chunk` fails the loop stops and `on_error` fires instead.
//! Cancelling aborts the task, which drops its pending timer, and sets a
//! flag that is checked before every callback.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use chat_types::config::StreamConfig;

use crate::ports::{SchedulerPort, StreamCallbacks};

/// Delays applied by the delivery loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamTiming {
    pub initial_delay: Duration,
    pub chunk_interval: Duration,
}

impl From<&StreamConfig> for StreamTiming {
    fn from(config: &StreamConfig) -> Self {
        Self {
            initial_delay: config.initial_delay(),
            chunk_interval: config.chunk_interval(),
        }
    }
}

impl Default for StreamTiming {
    fn default() -> Self {
        Self::from(&StreamConfig::default())
    }
}

#[derive(Default)]
struct DeliveryState {
    cancelled: Cell<bool>,
    finished: Cell<bool>,
    delivered: Cell<usize>,
}

/// Handle to one in-flight stream, used for cancellation
pub struct StreamHandle {
    abort: AbortHandle,
    state: Rc<DeliveryState>,
}

impl StreamHandle {
    /// Stop the stream. No callback fires after this returns.
    /// Safe to call repeatedly and after the stream has finished.
    pub fn cancel(&self) {
        if self.state.finished.get() || self.state.cancelled.replace(true) {
            return;
        }
        self.abort.abort();
        log::debug!(
            "Stream cancelled after {} chunks",
            self.state.delivered.get()
        );
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.get()
    }

    /// True once `on_complete` or `on_error` has fired
    pub fn is_finished(&self) -> bool {
        self.state.finished.get()
    }

    /// Number of chunks handed to `on_chunk` so far
    pub fn delivered(&self) -> usize {
        self.state.delivered.get()
    }
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle")
            .field("cancelled", &self.is_cancelled())
            .field("finished", &self.is_finished())
            .field("delivered", &self.delivered())
            .finish()
    }
}

/// Start delivering `chunks` on `scheduler`'s event loop.
pub fn start(
    scheduler: Rc<dyn SchedulerPort>,
    timing: StreamTiming,
    chunks: Vec<String>,
    callbacks: StreamCallbacks,
) -> StreamHandle {
    let (abort, registration) = AbortHandle::new_pair();
    let state = Rc::new(DeliveryState::default());

    let delivery = deliver(scheduler.clone(), timing, chunks, callbacks, state.clone());
    scheduler.spawn_local(Box::pin(async move {
        // An aborted loop ends silently; whoever cancelled already knows.
        let _ = Abortable::new(delivery, registration).await;
    }));

    StreamHandle { abort, state }
}

async fn deliver(
    scheduler: Rc<dyn SchedulerPort>,
    timing: StreamTiming,
    chunks: Vec<String>,
    callbacks: StreamCallbacks,
    state: Rc<DeliveryState>,
) {
    let StreamCallbacks {
        mut on_chunk,
        on_complete,
        on_error,
    } = callbacks;

    scheduler.sleep(timing.initial_delay).await;

    for chunk in &chunks {
        if state.cancelled.get() {
            return;
        }

        if let Err(e) = on_chunk(chunk.as_str()) {
            if state.cancelled.get() {
                return;
            }
            state.finished.set(true);
            on_error(e);
            return;
        }
        state.delivered.set(state.delivered.get() + 1);

        scheduler.sleep(timing.chunk_interval).await;
    }

    if state.cancelled.get() {
        return;
    }
    state.finished.set(true);
    on_complete();
}
