//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the snake simulation's building blocks. It has
//! **zero dependencies** on UI, timing sources, or I/O, making it:
//!
//! - **Deterministic**: same seed and same poll times produce the same run
//! - **Testable**: every rule is exercised without a terminal or a clock
//! - **Portable**: the engine can be driven by any loop that owns real time
//!
//! # Module Structure
//!
//! - [`grid`]: fixed coordinate space, bounds checks, random cell draws
//! - [`snake`]: body segments with O(1) head-push / tail-pop movement
//! - [`food`]: live food items keyed by opaque id, idempotent removal
//! - [`input_queue`]: FIFO of direction changes with reversal rejection
//! - [`pacing`]: score-driven scaling of tick interval and food lifetime
//! - [`collision`]: wall and self-intersection termination check
//! - [`timer`]: deterministic timer queue with cancellation tokens
//! - [`rng`]: LCG for reproducible food placement
//!
//! Nothing here reads a clock. Time enters as `TimeMs` arguments supplied
//! by whoever drives the engine - a terminal event loop in the shipped
//! binary, plain numbers in tests.

pub mod collision;
pub mod food;
pub mod grid;
pub mod input_queue;
pub mod pacing;
pub mod rng;
pub mod snake;
pub mod timer;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::{FoodId, FoodItem, FoodSet};
pub use grid::Grid;
pub use input_queue::InputQueue;
pub use pacing::PacingState;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use timer::{TimerId, Timers};
