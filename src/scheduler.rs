//! Cancellable delayed-task queue on a virtual clock.
//!
//! Views never touch wall-clock time. They ask for work to happen "after
//! `delay`" and the host feeds elapsed time into the [`Scheduler`], which
//! hands back tasks as they come due. Because the queue owns every pending
//! task, tearing a view down is a single [`Scheduler::cancel_all`]: nothing
//! queued before that call can fire afterwards.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use termfolio::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! let blink = scheduler.schedule(Duration::from_millis(500), "blink");
//! scheduler.schedule(Duration::from_millis(50), "type");
//!
//! assert_eq!(scheduler.advance(Duration::from_millis(60)), vec!["type"]);
//! assert!(scheduler.cancel(blink));
//! assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled task, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Delayed-task queue ordered by deadline, then by insertion order.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<u64, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether no task is waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Deadline of the earliest pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Queue `task` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, id), task);
        self.deadlines.insert(id, deadline);
        TaskId(id)
    }

    /// Cancel a pending task. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.deadlines.remove(&id.0) {
            Some(deadline) => self.queue.remove(&(deadline, id.0)).is_some(),
            None => false,
        }
    }

    /// Drop every pending task.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }

    /// Pop the earliest task whose deadline is at or before `until`.
    ///
    /// The clock moves to that task's deadline, so anything the caller
    /// schedules while handling it is timed from when it was due rather than
    /// from `until`. Returns `None` once nothing else is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let &(deadline, id) = self.queue.keys().next()?;
        if deadline > until {
            return None;
        }
        let task = self.queue.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some(task)
    }

    /// Move the clock forward to `until` without firing anything.
    ///
    /// Callers drain [`pop_due`](Self::pop_due) first; the clock never moves
    /// backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Advance the clock by `elapsed` and return every task that was due,
    /// in deadline order.
    ///
    /// Only tasks queued before the call are returned. Work scheduled while
    /// handling them starts from the new time.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        let until = self.now.saturating_add(elapsed);
        let mut due = Vec::new();
        while let Some(task) = self.pop_due(until) {
            due.push(task);
        }
        self.settle(until);
        due
    }
}
