//! Browser event-loop scheduler.
//!
//! Tasks go to the microtask queue via `wasm_bindgen_futures::spawn_local`,
//! sleeps are `setTimeout` timers via gloo-timers. Dropping a sleep clears
//! its timer, so a cancelled stream leaves nothing scheduled behind.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use chat_core::ports::SchedulerPort;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl BrowserScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulerPort for BrowserScheduler {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(TimeoutFuture::new(timeout_millis(duration)))
    }
}

/// `setTimeout` takes a u32 millisecond count
fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or_else(|_| {
        log::warn!("Timer of {:?} clamped to u32::MAX ms", duration);
        u32::MAX
    })
}
