//! Terminal snake runner (default binary).
//!
//! This is the primary gameplay entrypoint. It owns real time: the engine
//! is driven with milliseconds measured from process start, and the event
//! poll timeout is sized by the engine's next timer deadline so ticks,
//! spawns, and expiries fire on schedule without busy-waiting.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::Grid;
use tui_snake::engine::GameEngine;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TermFrontend, TerminalRenderer, Viewport};
use tui_snake::types::{GRID_COLS, GRID_ROWS};

/// Poll timeout while no timers are pending (after game over).
const IDLE_POLL_MS: u64 = 250;

/// Runner configuration, read from the environment.
///
/// - `SNAKE_COLS` / `SNAKE_ROWS`: grid dimensions (default 20x20)
/// - `SNAKE_SEED`: RNG seed for reproducible food placement
///
/// Malformed values fall back to the defaults.
#[derive(Debug, Clone, Copy)]
struct RunConfig {
    cols: i16,
    rows: i16,
    seed: u32,
}

impl RunConfig {
    fn from_env() -> Self {
        Self {
            cols: env_parse("SNAKE_COLS", GRID_COLS),
            rows: env_parse("SNAKE_ROWS", GRID_ROWS),
            seed: env_parse("SNAKE_SEED", clock_seed()),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = RunConfig::from_env();
    let grid = Grid::new(config.cols, config.rows);

    let mut engine = GameEngine::new(grid, config.seed);
    let mut frontend = TermFrontend::new();
    let view = GameView::new(grid);
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let now_ms = move || clock.elapsed().as_secs_f64() * 1000.0;

    engine.start(now_ms(), &mut frontend);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(frontend.model(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next timer deadline.
        let timeout = match engine.next_deadline() {
            Some(deadline) => Duration::from_secs_f64((deadline - now_ms()).max(0.0) / 1000.0),
            None => Duration::from_millis(IDLE_POLL_MS),
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action, now_ms(), &mut frontend);
                    }
                }
            }
        }

        // Fire whatever came due while we waited.
        engine.advance(now_ms(), &mut frontend);
    }
}
