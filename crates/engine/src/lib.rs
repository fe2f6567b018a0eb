//! Engine module - run lifecycle and timer orchestration
//!
//! Ties the simulation components together behind a two-state machine
//! (running / game over) and a single deterministic timer queue. The
//! engine is driven from outside: the caller supplies the current run time
//! to [`GameEngine::advance`] and receives render/HUD notifications through
//! the [`Frontend`] trait.
//!
//! # Example
//!
//! ```
//! use tui_snake_engine::{GameEngine, NullFrontend, Phase};
//! use tui_snake_core::Grid;
//! use tui_snake_core::types::Cell;
//!
//! let mut engine = GameEngine::new(Grid::new(10, 10), 12345);
//! let mut frontend = NullFrontend;
//!
//! engine.start(0.0, &mut frontend);
//! engine.spawn_food_at(Cell::new(6, 5), 0.0);
//! engine.advance(100.0, &mut frontend);
//!
//! assert_eq!(engine.score(), 1);
//! assert_eq!(engine.phase(), Phase::Running);
//! ```

pub mod frontend;
pub mod game;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use frontend::{Frontend, NullFrontend};
pub use game::{GameEngine, Phase};
