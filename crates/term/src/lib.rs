//! Terminal rendering module.
//!
//! A small framebuffer-based renderer (no widget/layout framework): the
//! game view projects a frame model into styled cells, and the renderer
//! flushes full or diffed frames to the terminal with crossterm.

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod renderer;

pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use frontend::TermFrontend;
pub use game_view::{FrameModel, GameView, Viewport};
pub use renderer::TerminalRenderer;
