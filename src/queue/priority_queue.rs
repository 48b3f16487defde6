use tracing::trace;

use super::job::{Job, Priority};
use super::QueueError;

/// A descending priority queue backed by a singly-linked chain of [`Job`]s.
///
/// The chain is kept sorted on insertion: priorities never increase from
/// head to tail, and jobs of equal priority keep their insertion order.
pub struct PriorityQueue<T> {
    head: Option<Box<Job<T>>>,
    len: usize,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns true if no jobs are queued
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of queued jobs
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert a command with a priority in `[0, 10]`.
    ///
    /// The priority is validated before the chain is touched, so a rejected
    /// job leaves the queue exactly as it was.
    pub fn enqueue(&mut self, command: T, priority: i64) -> Result<(), QueueError> {
        let priority = Priority::new(priority)?;
        let mut job = Box::new(Job::new(command, priority));

        // Walk past every job at the same or higher priority. `>=` keeps equal
        // priorities first in, first out; an empty queue or a strictly higher
        // priority stops at the head.
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|current| current.priority >= priority)
        {
            if let Some(current) = cursor {
                cursor = &mut current.next;
            }
        }
        job.next = cursor.take();
        *cursor = Some(job);
        self.len += 1;

        trace!(%priority, len = self.len, "job enqueued");
        Ok(())
    }

    /// Remove the highest priority job and hand its command to the caller.
    /// Returns `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let job = self.head.take()?;
        let Job {
            command,
            priority,
            next,
        } = *job;
        self.head = next;
        self.len -= 1;

        trace!(%priority, len = self.len, "job dequeued");
        Some(command)
    }

    /// The command that the next `dequeue` would return.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|job| &job.command)
    }

    /// Priority of the head job.
    pub fn peek_priority(&self) -> Option<Priority> {
        self.head.as_ref().map(|job| job.priority)
    }

    /// Walk the chain from head to tail without modifying it.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for PriorityQueue<T> {
    fn drop(&mut self) {
        // Unlink node by node; the default recursive drop can overflow the
        // stack on long chains.
        let mut link = self.head.take();
        while let Some(mut job) = link {
            link = job.next.take();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|job| (job.command(), job.priority())))
            .finish()
    }
}

/// Borrowing iterator over queued jobs, head first.
pub struct Iter<'a, T> {
    next: Option<&'a Job<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Job<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|job| {
            self.next = job.next.as_deref();
            job
        })
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a Job<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that dequeues until the queue is empty.
pub struct IntoIter<T>(PriorityQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
