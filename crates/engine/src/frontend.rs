//! Frontend trait - the engine's one-way collaborator seam
//!
//! Rendering and HUD live behind this trait so the engine never touches a
//! terminal. Calls flow outward only; nothing a frontend does feeds back
//! into simulation state. The terminal implementation lives in the term
//! crate, tests record the calls, and benches use [`NullFrontend`].

use tui_snake_core::types::Cell;

/// Render and HUD notifications emitted by the engine.
pub trait Frontend {
    /// Redraw request after a non-terminal tick: current snake segments
    /// (head first) and live food positions.
    fn draw(&mut self, snake: &[Cell], food: &[Cell]);

    /// Score changed (fires on every food eaten and on restart).
    fn set_score(&mut self, score: u32);

    /// Wall-clock seconds since the run started; display only.
    fn set_elapsed(&mut self, seconds: f64);

    /// The run ended; show the end-of-run indicator.
    fn show_game_over(&mut self);

    /// A new run started; hide the end-of-run indicator.
    fn hide_game_over(&mut self);
}

/// Frontend that ignores every notification.
///
/// Useful for headless driving (benchmarks, bulk simulation).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn draw(&mut self, _snake: &[Cell], _food: &[Cell]) {}
    fn set_score(&mut self, _score: u32) {}
    fn set_elapsed(&mut self, _seconds: f64) {}
    fn show_game_over(&mut self) {}
    fn hide_game_over(&mut self) {}
}
