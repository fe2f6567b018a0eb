//! Snake module - body segments and movement mechanics
//!
//! The body is a deque with the head at the front, so advancing is a
//! push-front and trimming is a pop-back, both O(1). The snake itself never
//! rejects a move and never decides growth: the engine advances the head
//! unconditionally and only trims the tail when no food was eaten, which is
//! what makes each food worth exactly one segment.

use std::collections::VecDeque;

use crate::types::{Cell, Direction};

/// The snake's body, head first, non-empty for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A new single-segment snake at `head`.
    pub fn spawn(head: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(head);
        Self { body }
    }

    /// Current head position.
    pub fn head(&self) -> Cell {
        // Invariant: the body is never empty while a run is live.
        *self.body.front().unwrap()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// All segments, head first.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// True if any segment (head included) occupies `cell`.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Push a new head one step in `direction` and return it.
    ///
    /// The tail is untouched: callers decide afterwards whether this step
    /// grows the snake (food eaten) or keeps its length (call
    /// [`trim_tail`](Self::trim_tail)).
    pub fn advance(&mut self, direction: Direction) -> Cell {
        let new_head = self.head().step(direction);
        self.body.push_front(new_head);
        new_head
    }

    /// Drop the tail segment (the no-food branch of a step).
    pub fn trim_tail(&mut self) {
        self.body.pop_back();
    }

    /// True if the head coincides with any other segment.
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }
}
