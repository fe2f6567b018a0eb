//! Timer module - a deterministic single-thread timer queue
//!
//! All of the engine's scheduled work - the repeating tick, the food
//! spawner, the elapsed-time reporter, and one expiry per live food item -
//! lives in one queue owned by the engine and drained on the caller's
//! thread. Scheduling hands back a [`TimerId`] that cancels the entry;
//! cancellation is idempotent, and canceling everything at game over makes
//! a post-run callback structurally impossible rather than merely ignored.
//!
//! Entries are drained one at a time in deadline order (ties resolve in
//! arming order). Work fired by one entry can therefore cancel a later-due
//! entry before it is ever observed - this is what keeps a food item's
//! "eaten" and "expired" outcomes mutually exclusive.

use crate::types::TimeMs;

/// Cancellation token for a scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    id: TimerId,
    deadline: TimeMs,
    /// `Some(period)` re-arms the entry after each fire.
    period: Option<TimeMs>,
    task: T,
}

/// Deadline-ordered queue of scheduled tasks tagged with `T`.
#[derive(Debug, Clone)]
pub struct Timers<T> {
    entries: Vec<TimerEntry<T>>,
    next_id: u64,
}

impl<T: Copy> Timers<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Schedule `task` to fire once at `now + delay_ms`.
    pub fn schedule_once(&mut self, now: TimeMs, delay_ms: TimeMs, task: T) -> TimerId {
        debug_assert!(delay_ms > 0.0);
        let id = self.allocate_id();
        self.entries.push(TimerEntry {
            id,
            deadline: now + delay_ms,
            period: None,
            task,
        });
        id
    }

    /// Schedule `task` to fire every `period_ms`, first at `now + period_ms`.
    pub fn schedule_repeating(&mut self, now: TimeMs, period_ms: TimeMs, task: T) -> TimerId {
        debug_assert!(period_ms > 0.0);
        let id = self.allocate_id();
        self.entries.push(TimerEntry {
            id,
            deadline: now + period_ms,
            period: Some(period_ms),
            task,
        });
        id
    }

    /// Remove the entry for `id`.
    ///
    /// Returns false if the entry already fired (one-shot) or was already
    /// canceled - a stale token is a no-op, never an error.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every entry.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Earliest pending deadline, if any entry is scheduled.
    pub fn next_deadline(&self) -> Option<TimeMs> {
        self.entries
            .iter()
            .map(|e| e.deadline)
            .min_by(f64::total_cmp)
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fire the earliest entry that is due at `now`, if any.
    ///
    /// One-shot entries are removed; repeating entries re-arm by one period
    /// (an entry more than one period overdue fires again on the next
    /// poll). Equal deadlines fire in arming order. Callers drain with
    /// `while let Some(..)` and may cancel still-pending entries between
    /// iterations.
    pub fn poll_expired(&mut self, now: TimeMs) -> Option<(TimerId, T)> {
        let mut due: Option<usize> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.deadline > now {
                continue;
            }
            match due {
                Some(best) if self.entries[best].deadline <= entry.deadline => {}
                _ => due = Some(idx),
            }
        }

        let idx = due?;
        let id = self.entries[idx].id;
        let task = self.entries[idx].task;

        match self.entries[idx].period {
            Some(period) => self.entries[idx].deadline += period,
            None => {
                self.entries.remove(idx);
            }
        }

        Some((id, task))
    }
}

impl<T: Copy> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}
