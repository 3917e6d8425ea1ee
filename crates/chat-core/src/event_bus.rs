//! Event bus between the conversation controller and the UI.
//!
//! Single-threaded (WASM constraint), shared through `Rc<RefCell<..>>`.
//! The controller publishes from inside stream callbacks; the UI drains
//! once per frame and repaints if anything arrived.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chat_types::event::ChatEvent;

/// Shared event queue — clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ChatEvent) {
        log::trace!("chat event: {:?}", event);
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.borrow().len()
    }
}
