//! Terminal frontend: collects engine notifications into a frame model.
//!
//! The engine pushes snake/food/score/elapsed updates through the
//! [`Frontend`] trait; the runner projects the accumulated model through
//! [`GameView`](crate::game_view::GameView) once per loop pass. Nothing
//! here feeds back into the engine.

use crate::game_view::FrameModel;
use crate::types::Cell;
use tui_snake_engine::Frontend;

/// [`Frontend`] implementation backed by a [`FrameModel`].
#[derive(Debug, Default)]
pub struct TermFrontend {
    model: FrameModel,
}

impl TermFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest accumulated frame state.
    pub fn model(&self) -> &FrameModel {
        &self.model
    }
}

impl Frontend for TermFrontend {
    fn draw(&mut self, snake: &[Cell], food: &[Cell]) {
        self.model.snake.clear();
        self.model.snake.extend_from_slice(snake);
        self.model.food.clear();
        self.model.food.extend_from_slice(food);
    }

    fn set_score(&mut self, score: u32) {
        self.model.score = score;
    }

    fn set_elapsed(&mut self, seconds: f64) {
        self.model.elapsed_secs = seconds;
    }

    fn show_game_over(&mut self) {
        self.model.game_over = true;
    }

    fn hide_game_over(&mut self) {
        self.model.game_over = false;
        // The previous run's last frame is stale once a new run begins.
        self.model.snake.clear();
        self.model.food.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_accumulate_into_the_model() {
        let mut frontend = TermFrontend::new();

        frontend.set_score(2);
        frontend.set_elapsed(1.5);
        frontend.draw(&[Cell::new(5, 5)], &[Cell::new(1, 1)]);

        let model = frontend.model();
        assert_eq!(model.score, 2);
        assert_eq!(model.elapsed_secs, 1.5);
        assert_eq!(model.snake, vec![Cell::new(5, 5)]);
        assert_eq!(model.food, vec![Cell::new(1, 1)]);
        assert!(!model.game_over);
    }

    #[test]
    fn game_over_toggles_and_restart_clears_the_board() {
        let mut frontend = TermFrontend::new();
        frontend.draw(&[Cell::new(5, 5)], &[]);

        frontend.show_game_over();
        assert!(frontend.model().game_over);
        // The terminal frame keeps the last drawn state on screen.
        assert!(!frontend.model().snake.is_empty());

        frontend.hide_game_over();
        assert!(!frontend.model().game_over);
        assert!(frontend.model().snake.is_empty());
    }
}
