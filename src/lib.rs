//! jobqueue -- a stable, descending priority job queue.
//!
//! Jobs carry a priority in `[0, 10]`; the queue serves the highest priority
//! first and breaks ties by insertion order. The [`driver`] feeds job lists
//! through a queue and checks the order they come back out.

pub mod config;
pub mod driver;
pub mod queue;

pub use queue::{Command, Priority, PriorityQueue, QueueError};
