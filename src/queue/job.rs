//! Queue entries and their validated priority.

use serde::{Deserialize, Serialize};

use super::QueueError;

/// Job priority in the closed range `[Priority::MIN, Priority::MAX]`.
///
/// Higher values are more urgent: 10 jumps ahead of everything, 0 waits
/// behind everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: Priority = Priority(0);
    pub const MAX: Priority = Priority(10);

    /// Validate a raw integer priority.
    pub fn new(value: i64) -> Result<Self, QueueError> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(QueueError::InvalidPriority(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = QueueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque command token carried by a job. The queue never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Command {
    fn from(command: &str) -> Self {
        Self(command.to_string())
    }
}

impl From<String> for Command {
    fn from(command: String) -> Self {
        Self(command)
    }
}

impl PartialEq<&str> for Command {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A queued job: one link in the queue's chain.
///
/// Each job owns its successor, so the chain is owned end to end by
/// whichever holds the head.
#[derive(Debug)]
pub struct Job<T> {
    pub(crate) command: T,
    pub(crate) priority: Priority,
    pub(crate) next: Option<Box<Job<T>>>,
}

impl<T> Job<T> {
    pub(crate) fn new(command: T, priority: Priority) -> Self {
        Self {
            command,
            priority,
            next: None,
        }
    }

    pub fn command(&self) -> &T {
        &self.command
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}
