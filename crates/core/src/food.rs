//! Food module - active food items with independent expiry deadlines
//!
//! Items are keyed by an opaque, strictly increasing [`FoodId`] instead of a
//! positional index, so removing one item never shifts another. Removal by
//! id is idempotent: whichever of "eaten" and "expired" happens first wins,
//! and the loser's removal finds nothing and does nothing. Two items may
//! share a position (the spawner does not deduplicate); consumption removes
//! only the earliest-spawned match.

use std::collections::BTreeMap;

use crate::timer::TimerId;
use crate::types::{Cell, TimeMs};

/// Opaque identifier for a food item, unique within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoodId(u64);

/// A food item on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodItem {
    pub pos: Cell,
    /// Deadline the item was spawned with; fixed for its whole life.
    pub expires_at: TimeMs,
    /// Token for the scheduled expiry, canceled when the item is eaten.
    pub expiry: TimerId,
}

/// The set of live food items, iterated in spawn order.
#[derive(Debug, Clone, Default)]
pub struct FoodSet {
    items: BTreeMap<FoodId, FoodItem>,
    next_id: u64,
}

impl FoodSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the id for the next spawned item.
    pub fn allocate_id(&mut self) -> FoodId {
        let id = FoodId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, id: FoodId, item: FoodItem) {
        self.items.insert(id, item);
    }

    /// Remove and return the earliest-spawned item occupying `cell`.
    ///
    /// At most one item is removed per call; `None` signals "nothing eaten".
    pub fn consume_at(&mut self, cell: Cell) -> Option<FoodItem> {
        let id = self
            .items
            .iter()
            .find(|(_, item)| item.pos == cell)
            .map(|(&id, _)| id)?;
        self.items.remove(&id)
    }

    /// Remove the item for `id`, if it still exists.
    ///
    /// An id that was already consumed (or expired) is absent and the call
    /// is a no-op.
    pub fn remove(&mut self, id: FoodId) -> Option<FoodItem> {
        self.items.remove(&id)
    }

    /// Positions of all live items, in spawn order.
    pub fn positions(&self) -> impl Iterator<Item = Cell> + '_ {
        self.items.values().map(|item| item.pos)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(x: i16, y: i16, expires_at: TimeMs) -> FoodItem {
        // Tests never poll these timers, any token value works.
        let mut timers = crate::timer::Timers::new();
        let expiry = timers.schedule_once(0.0, expires_at.max(1.0), ());
        FoodItem {
            pos: Cell::new(x, y),
            expires_at,
            expiry,
        }
    }

    #[test]
    fn consume_removes_exactly_one_match() {
        let mut food = FoodSet::new();
        let a = food.allocate_id();
        let b = food.allocate_id();
        food.insert(a, item(3, 3, 100.0));
        food.insert(b, item(3, 3, 200.0));

        let eaten = food.consume_at(Cell::new(3, 3)).unwrap();
        assert_eq!(eaten.expires_at, 100.0);
        assert_eq!(food.len(), 1);

        // The second co-located item is still there.
        assert!(food.consume_at(Cell::new(3, 3)).is_some());
        assert!(food.consume_at(Cell::new(3, 3)).is_none());
    }

    #[test]
    fn consume_misses_on_empty_cell() {
        let mut food = FoodSet::new();
        let id = food.allocate_id();
        food.insert(id, item(1, 1, 100.0));

        assert!(food.consume_at(Cell::new(2, 2)).is_none());
        assert_eq!(food.len(), 1);
    }

    #[test]
    fn removal_is_idempotent() {
        let mut food = FoodSet::new();
        let id = food.allocate_id();
        food.insert(id, item(4, 4, 100.0));

        assert!(food.remove(id).is_some());
        assert!(food.remove(id).is_none());
    }

    #[test]
    fn eaten_item_cannot_expire() {
        let mut food = FoodSet::new();
        let id = food.allocate_id();
        food.insert(id, item(4, 4, 100.0));

        assert!(food.consume_at(Cell::new(4, 4)).is_some());
        // The expiry path removing by id finds nothing.
        assert!(food.remove(id).is_none());
    }

    #[test]
    fn positions_iterate_in_spawn_order() {
        let mut food = FoodSet::new();
        for x in 0..3 {
            let id = food.allocate_id();
            food.insert(id, item(x, 0, 100.0));
        }

        let xs: Vec<i16> = food.positions().map(|c| c.x).collect();
        assert_eq!(xs, vec![0, 1, 2]);
    }

    #[test]
    fn ids_keep_increasing_after_clear() {
        let mut food = FoodSet::new();
        let a = food.allocate_id();
        food.clear();
        let b = food.allocate_id();
        assert_ne!(a, b);
    }
}
