//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the coordination logic and
//! the outside world (data file, outbox, clock, hosted language model).
//!
//! Implementations live in the `adapters` module; tests supply in-memory
//! versions.

mod clock;
mod completion;
mod messenger;
mod persistence;

pub use clock::{Clock, SystemClock};
pub use completion::{CompletionError, OfflineCompletion, TextCompletion};
pub use messenger::Messenger;
pub use persistence::Persistence;
