//! GameView: maps a frame model into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Cell;
use tui_snake_engine::core::Grid;

/// Head color (matches the classic green snake look).
const HEAD: Rgb = Rgb::new(46, 204, 113);
/// Body color, one shade darker than the head.
const BODY: Rgb = Rgb::new(39, 174, 96);
/// Food color.
const FOOD: Rgb = Rgb::new(231, 76, 60);
/// Play-area background.
const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
/// Border foreground.
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the terminal needs to draw one frame.
///
/// Filled in by the frontend from engine notifications; the view only
/// reads it.
#[derive(Debug, Clone, Default)]
pub struct FrameModel {
    /// Snake segments, head first.
    pub snake: Vec<Cell>,
    /// Live food positions.
    pub food: Vec<Cell>,
    pub score: u32,
    pub elapsed_secs: f64,
    pub game_over: bool,
}

/// A lightweight terminal renderer for the snake playfield.
pub struct GameView {
    grid: Grid,
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl GameView {
    /// 2x1 terminal cells per grid cell compensates for typical glyph
    /// aspect ratio.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cell_w: 2,
            cell_h: 1,
        }
    }

    /// Render the frame model into an existing framebuffer.
    ///
    /// Callers reuse one framebuffer across frames; it is resized only
    /// when the viewport changes.
    pub fn render_into(&self, model: &FrameModel, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (self.grid.cols() as u16) * self.cell_w;
        let board_px_h = (self.grid.rows() as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // One HUD row above the playfield frame.
        let total_h = frame_h + 1;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let hud_y = viewport.height.saturating_sub(total_h) / 2;
        let frame_y = hud_y + 1;

        let hud = CellStyle::default();
        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: PLAYFIELD_BG,
            bold: false,
        };
        let border = CellStyle {
            fg: BORDER_FG,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.put_str(
            start_x,
            hud_y,
            &format!("Score: {}   Time: {:.1}s", model.score, model.elapsed_secs),
            hud,
        );

        fb.fill_rect(start_x + 1, frame_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, frame_y, frame_w, frame_h, border);

        for &cell in &model.food {
            self.fill_grid_cell(fb, start_x, frame_y, cell, FOOD);
        }

        for (idx, &cell) in model.snake.iter().enumerate() {
            let color = if idx == 0 { HEAD } else { BODY };
            self.fill_grid_cell(fb, start_x, frame_y, cell, color);
        }

        if model.game_over {
            let banner = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            let mid_y = frame_y + frame_h / 2;
            center_str(fb, start_x, frame_w, mid_y.saturating_sub(1), "GAME OVER", banner);
            center_str(fb, start_x, frame_w, mid_y, "press r to restart", banner);
        }
    }

    /// Paint one grid cell as a solid block of `color`.
    fn fill_grid_cell(&self, fb: &mut FrameBuffer, start_x: u16, frame_y: u16, cell: Cell, color: Rgb) {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.grid.cols() || cell.y >= self.grid.rows() {
            return;
        }
        let px = start_x + 1 + (cell.x as u16) * self.cell_w;
        let py = frame_y + 1 + (cell.y as u16) * self.cell_h;
        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

fn center_str(fb: &mut FrameBuffer, start_x: u16, frame_w: u16, y: u16, s: &str, style: CellStyle) {
    let len = s.chars().count() as u16;
    let x = start_x + frame_w.saturating_sub(len) / 2;
    fb.put_str(x, y, s, style);
}
