//! Scheduler layer for the runner
//!
//! Drives the poll/wait/repeat loop against the target. Only one exchange
//! is ever in flight, and the first transport error ends the loop.

pub mod poller;

pub use poller::Poller;
