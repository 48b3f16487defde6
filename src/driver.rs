//! Feeds (command, priority) lists through a [`PriorityQueue`] and checks the
//! order they come back out.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::queue::{Command, PriorityQueue, QueueError};

/// Built-in demonstration stream.
pub const DEMO_JOBS: &str = r#"[
    {"command": "zbe", "priority": 7},
    {"command": "lmy", "priority": 10},
    {"command": "swc", "priority": 7},
    {"command": "jtc", "priority": 2},
    {"command": "slg", "priority": 4},
    {"command": "rwa", "priority": 10},
    {"command": "zln", "priority": 1},
    {"command": "ytm", "priority": 6},
    {"command": "aou", "priority": 8},
    {"command": "uuv", "priority": 3}
]"#;

/// Dequeue order of [`DEMO_JOBS`].
pub const DEMO_EXPECTED: [&str; 10] = [
    "lmy", "rwa", "aou", "zbe", "swc", "ytm", "slg", "uuv", "jtc", "zln",
];

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read job list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid job list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot enqueue '{command}': {source}")]
    Queue {
        command: Command,
        #[source]
        source: QueueError,
    },

    #[error("expected order of commands: {expected:?}; got: {actual:?}")]
    OrderMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// One input record: a command and the priority to queue it at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobSpec {
    pub command: Command,
    /// Kept signed and unchecked so range errors come from the queue. Numbers
    /// that do not fit an `i64` (`1e20`, `99999999999999999999`) fail in the
    /// JSON decoder instead and surface as [`DriverError::Parse`].
    pub priority: i64,
}

impl JobSpec {
    pub fn new(command: impl Into<Command>, priority: i64) -> Self {
        Self {
            command: command.into(),
            priority,
        }
    }
}

/// Decode a JSON array of `{"command", "priority"}` objects.
pub fn parse_jobs(json: &str) -> Result<Vec<JobSpec>, DriverError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and decode a job list file.
pub fn load_jobs(path: &Path) -> Result<Vec<JobSpec>, DriverError> {
    let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let jobs = parse_jobs(&content)?;
    debug!(path = %path.display(), count = jobs.len(), "loaded job list");
    Ok(jobs)
}

/// Enqueue every job in input order. Stops at the first rejected priority;
/// jobs before it stay queued.
pub fn enqueue_all(queue: &mut PriorityQueue<Command>, jobs: &[JobSpec]) -> Result<(), DriverError> {
    for job in jobs {
        queue
            .enqueue(job.command.clone(), job.priority)
            .map_err(|source| DriverError::Queue {
                command: job.command.clone(),
                source,
            })?;
        info!(command = %job.command, priority = job.priority, "enqueued");
    }
    Ok(())
}

/// Dequeue until the queue reports empty.
pub fn drain(queue: &mut PriorityQueue<Command>) -> Vec<Command> {
    let mut drained = Vec::with_capacity(queue.len());
    while let Some(command) = queue.dequeue() {
        info!(%command, "dequeued");
        drained.push(command);
    }
    drained
}

/// Push `jobs` through a fresh queue and return the dequeue order.
pub fn run(jobs: &[JobSpec]) -> Result<Vec<Command>, DriverError> {
    let mut queue = PriorityQueue::new();
    enqueue_all(&mut queue, jobs)?;
    Ok(drain(&mut queue))
}

/// Compare a dequeue order against the expected one.
pub fn verify<S: AsRef<str>>(expected: &[S], actual: &[Command]) -> Result<(), DriverError> {
    let matches = expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(want, got)| want.as_ref() == got.as_str());
    if matches {
        return Ok(());
    }
    Err(DriverError::OrderMismatch {
        expected: expected.iter().map(|s| s.as_ref().to_string()).collect(),
        actual: actual.iter().map(|c| c.to_string()).collect(),
    })
}

/// Run the built-in demonstration and check its order.
pub fn run_demo() -> Result<Vec<Command>, DriverError> {
    let jobs = parse_jobs(DEMO_JOBS)?;
    let order = run(&jobs)?;
    verify(&DEMO_EXPECTED[..], &order)?;
    Ok(order)
}
