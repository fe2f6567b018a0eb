//! Collision module - the run's termination condition
//!
//! Checked once per tick, after movement and food resolution and before any
//! render notification. A hit is not an error: it is the designed signal
//! that moves the engine to game over.

use crate::grid::Grid;
use crate::snake::Snake;

/// True if the head left the grid or ran into the body.
pub fn check(snake: &Snake, grid: &Grid) -> bool {
    !grid.in_bounds(snake.head()) || snake.collides_with_self()
}
