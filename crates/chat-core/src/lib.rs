//! Streaming chat pipeline: chunk generation, timed delivery, the
//! conversation store and the controller that ties them together.
//! No platform dependencies — timers and task spawning come in through
//! [`ports::SchedulerPort`].

pub mod chunker;
pub mod ports;
pub mod driver;
pub mod source;
pub mod store;
pub mod controller;
pub mod event_bus;


pub use controller::{ChatController, ControllerState};
pub use driver::StreamHandle;
pub use event_bus::EventBus;
pub use ports::{SchedulerPort, StreamCallbacks, StreamSource};
pub use source::EchoStreamSource;
pub use store::ConversationStore;
