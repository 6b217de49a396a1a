//! Virtual-time queue of timed continuations.
//!
//! Nothing here sleeps. The owner advances time explicitly and drains the
//! tasks that have come due, which keeps every delay deterministic.

use std::collections::BTreeMap;
use std::time::Duration;

/// Timed tasks ordered by due time, then by scheduling order.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: BTreeMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to run `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let due = self.now + delay;
        self.queue.insert((due, self.seq), task);
        self.seq += 1;
    }

    /// Due time of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its due time. Tasks scheduled while handling it are seen by the next
    /// call.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (&(due, seq), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }
        self.now = self.now.max(due);
        self.queue.remove(&(due, seq))
    }

    /// Move the clock forward without running anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
