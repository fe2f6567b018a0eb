//! Input queue module - buffered direction changes with reversal rejection
//!
//! Direction proposals are queued rather than overwriting the motion
//! directly: rapid key input is honored in arrival order, one change per
//! tick, and a proposal that would reverse the snake straight back through
//! its own neck is dropped at this boundary. The reversal check compares
//! against the *effective last-intended direction* - the newest queued entry
//! if any, otherwise the current motion - so queuing "up" then "down" within
//! one tick interval cannot smuggle a reversal past the check.

use std::collections::VecDeque;

use crate::types::Direction;

/// FIFO of validated direction changes, drained one entry per tick.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    queue: VecDeque<Direction>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `candidate` unless it reverses the last intended direction.
    ///
    /// The reference direction is the newest queued entry, or
    /// `current_motion` when the queue is empty. A reversal is discarded
    /// silently - no state change, no error.
    pub fn propose(&mut self, candidate: Direction, current_motion: Direction) {
        let reference = self.queue.back().copied().unwrap_or(current_motion);
        if candidate.is_opposite(reference) {
            return;
        }
        self.queue.push_back(candidate);
    }

    /// Take the oldest queued direction, or keep `current_motion`.
    pub fn consume_next(&mut self, current_motion: Direction) -> Direction {
        self.queue.pop_front().unwrap_or(current_motion)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
