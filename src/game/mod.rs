//! One game session driven round by round.

mod event;
mod observer;
mod orchestrator;
mod phase;
mod round;
mod session;

pub use event::*;
pub use observer::*;
pub use orchestrator::*;
pub use phase::*;
pub use round::*;
pub use session::*;
