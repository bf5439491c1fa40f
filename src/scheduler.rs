//! "Run this after a delay", single threaded.
//!
//! Playback never spawns threads or timers of its own. Whoever drives it hands a [`Scheduler`] to
//! every call that may want a follow-up step, and later feeds the [`Ticket`] back when the delay
//! has passed. [`TimerQueue`] is a virtual-clock implementation that tests advance by hand and the
//! terminal front end drains with real sleeps.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Identifies one scheduled step. `session` changes whenever playback is restarted or cancelled;
/// `tick` changes every time a step is scheduled. Only a ticket matching both is honored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket {
    /// Playback run the step belongs to.
    pub session: u64,
    /// Which scheduled step within that run.
    pub tick: u64,
}

/// Something that can call back after a delay.
pub trait Scheduler {
    /// Arrange for `ticket` to be delivered once `delay` has passed.
    fn schedule(&mut self, delay: Duration, ticket: Ticket);
}

/// A timer that fired.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fired {
    /// How long after the previous fired timer (or the start) this one was due.
    pub waited: Duration,
    /// The ticket to deliver.
    pub ticket: Ticket,
}

/// Pending timers ordered by due time, on a clock that only moves when timers are popped.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    seq: u64,
    pending: BinaryHeap<Reverse<(Duration, u64, Ticket)>>,
}

impl TimerQueue {
    /// An empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// When the earliest pending timer is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Every pending ticket, in no particular order.
    pub fn pending(&self) -> impl Iterator<Item = Ticket> + '_ {
        self.pending.iter().map(|Reverse((_, _, ticket))| *ticket)
    }

    /// Pops the earliest timer and moves the clock to its due time. Timers due at the same time
    /// fire in the order they were scheduled.
    pub fn pop_next(&mut self) -> Option<Fired> {
        let Reverse((due, _, ticket)) = self.pending.pop()?;
        let waited = due.saturating_sub(self.now);
        self.now = self.now.max(due);
        Some(Fired { waited, ticket })
    }

    /// Pops the earliest timer only if it is due by `deadline`. The clock doesn't move past
    /// `deadline`.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Fired> {
        match self.next_due() {
            Some(due) if due <= deadline => self.pop_next(),
            _ => {
                self.now = self.now.max(deadline);
                None
            }
        }
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, ticket: Ticket) {
        self.seq += 1;
        self.pending
            .push(Reverse((self.now + delay, self.seq, ticket)));
    }
}
