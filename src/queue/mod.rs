//! Stable descending priority queue.
//!
//! Priority 10 is served first and 0 last. Jobs of equal priority are served
//! in the order they were enqueued.

pub mod job;
pub mod priority_queue;

use thiserror::Error;

pub use job::{Command, Job, Priority};
pub use priority_queue::{IntoIter, Iter, PriorityQueue};

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("priority {0} is out of range [0, 10]")]
    InvalidPriority(i64),
}
