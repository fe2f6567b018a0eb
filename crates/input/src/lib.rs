//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Turn keys are
//! delivered to the engine's input queue as proposals; the queue, not this
//! module, decides whether a turn is legal.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
