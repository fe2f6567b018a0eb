//! Game engine module - the run's state machine and timer orchestration
//!
//! The engine owns every simulation component plus one timer queue holding
//! the repeating tick, the food spawner, the elapsed-time reporter, and one
//! expiry entry per live food item. Whoever drives the engine calls
//! [`GameEngine::advance`] with the current run time; due timers fire in
//! deadline order on that caller's thread, so the whole game is a single
//! logical thread of control and every interleaving is reproducible.
//!
//! Lifecycle: `start` resets everything and arms the timers; a collision
//! inside a tick calls `end`, which cancels every outstanding timer before
//! entering game over - a callback attributable to a finished run can no
//! longer fire. `start` is valid from either phase, so restart and first
//! start are the same code path.

use crate::frontend::Frontend;
use tui_snake_core::types::{
    Cell, Direction, GameAction, TimeMs, ELAPSED_PERIOD_MS, FOOD_SPAWN_PERIOD_MS,
};
use tui_snake_core::{
    collision, FoodId, FoodItem, FoodSet, Grid, InputQueue, PacingState, SimpleRng, Snake, TimerId,
    Timers,
};

/// Run lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Work items carried by the engine's timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// One simulation step (interval scales with score).
    Tick,
    /// One food spawn attempt (fixed period).
    SpawnFood,
    /// HUD elapsed-time report (fixed period, display only).
    ReportElapsed,
    /// Expiry of a specific food item.
    ExpireFood(FoodId),
}

/// The snake simulation engine.
pub struct GameEngine {
    grid: Grid,
    snake: Snake,
    /// Direction the snake is currently moving in.
    motion: Direction,
    input: InputQueue,
    food: FoodSet,
    pacing: PacingState,
    score: u32,
    rng: SimpleRng,
    timers: Timers<Task>,
    /// Token for the repeating tick entry; replaced when pacing changes.
    tick_timer: Option<TimerId>,
    phase: Phase,
    /// Run start time, used only to derive the HUD elapsed display.
    started_at: TimeMs,
}

impl GameEngine {
    /// Create an idle engine. Nothing moves until [`start`](Self::start).
    pub fn new(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            snake: Snake::spawn(grid.center()),
            motion: Direction::Right,
            input: InputQueue::new(),
            food: FoodSet::new(),
            pacing: PacingState::default(),
            score: 0,
            rng: SimpleRng::new(seed),
            timers: Timers::new(),
            tick_timer: None,
            phase: Phase::GameOver,
            started_at: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &FoodSet {
        &self.food
    }

    pub fn pacing(&self) -> PacingState {
        self.pacing
    }

    /// Direction applied to the most recent step.
    pub fn motion(&self) -> Direction {
        self.motion
    }

    /// Earliest pending timer deadline; `None` after game over.
    ///
    /// Drivers use this to size their poll timeout.
    pub fn next_deadline(&self) -> Option<TimeMs> {
        self.timers.next_deadline()
    }

    /// Begin a fresh run at `now`, from either phase.
    ///
    /// Every piece of per-run state is re-initialized: single-segment snake
    /// at the grid center moving right, empty input queue and food set,
    /// score 0, default pacing, run clock at `now`. The tick timer is armed
    /// first, then the food spawner (fixed 1 s period, independent of
    /// pacing), then the elapsed reporter (fixed 100 ms period) - arming
    /// order is the tie-break for same-instant deadlines.
    pub fn start(&mut self, now: TimeMs, frontend: &mut dyn Frontend) {
        self.timers.cancel_all();
        self.snake = Snake::spawn(self.grid.center());
        self.motion = Direction::Right;
        self.input.clear();
        self.food.clear();
        self.score = 0;
        self.pacing = PacingState::default();
        self.started_at = now;
        self.phase = Phase::Running;

        self.tick_timer = Some(self.timers.schedule_repeating(
            now,
            self.pacing.tick_interval_ms(),
            Task::Tick,
        ));
        self.timers
            .schedule_repeating(now, FOOD_SPAWN_PERIOD_MS, Task::SpawnFood);
        self.timers
            .schedule_repeating(now, ELAPSED_PERIOD_MS, Task::ReportElapsed);

        frontend.hide_game_over();
        frontend.set_score(0);
        frontend.set_elapsed(0.0);
    }

    /// Fire every timer due at `now`, in deadline order.
    ///
    /// A tick that ends the run cancels all remaining entries, so the drain
    /// stops on its own; nothing fires after `end`.
    pub fn advance(&mut self, now: TimeMs, frontend: &mut dyn Frontend) {
        while let Some((_, task)) = self.timers.poll_expired(now) {
            match task {
                Task::Tick => self.tick(now, frontend),
                Task::SpawnFood => {
                    self.spawn_food(now);
                }
                Task::ReportElapsed => {
                    frontend.set_elapsed((now - self.started_at) / 1000.0);
                }
                Task::ExpireFood(id) => {
                    // Unconsumed food vanishes with no score effect. An id
                    // already eaten is absent and this is a no-op.
                    self.food.remove(id);
                }
            }
        }
    }

    /// Deliver a player action.
    pub fn apply_action(&mut self, action: GameAction, now: TimeMs, frontend: &mut dyn Frontend) {
        match action {
            GameAction::Turn(direction) => self.propose_direction(direction),
            GameAction::Restart => self.start(now, frontend),
        }
    }

    /// Queue a direction change; ignored after game over.
    pub fn propose_direction(&mut self, direction: Direction) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.input.propose(direction, self.motion);
    }

    /// Place a food item at `cell` expiring after the current food
    /// lifetime.
    ///
    /// Returns false - attempt dropped, no retry - if the cell is occupied
    /// by the snake or no run is live. The random spawner delegates here;
    /// tests and scripted demos use it for exact placement.
    pub fn spawn_food_at(&mut self, cell: Cell, now: TimeMs) -> bool {
        if self.phase == Phase::GameOver || self.snake.occupies(cell) {
            return false;
        }
        let lifetime = self.pacing.food_lifetime_ms();
        let id = self.food.allocate_id();
        let expiry = self.timers.schedule_once(now, lifetime, Task::ExpireFood(id));
        self.food.insert(
            id,
            FoodItem {
                pos: cell,
                expires_at: now + lifetime,
                expiry,
            },
        );
        true
    }

    /// One spawn attempt at a uniformly random cell.
    fn spawn_food(&mut self, now: TimeMs) -> bool {
        let cell = self.grid.random_cell(&mut self.rng);
        self.spawn_food_at(cell, now)
    }

    /// One simulation step. Only ever reached from a live tick timer.
    fn tick(&mut self, now: TimeMs, frontend: &mut dyn Frontend) {
        self.motion = self.input.consume_next(self.motion);
        let new_head = self.snake.advance(self.motion);

        match self.food.consume_at(new_head) {
            Some(item) => {
                // Eaten before expiry: the pending expiry entry must never
                // fire for this id.
                self.timers.cancel(item.expiry);
                self.score += 1;
                self.pacing.on_food_eaten();

                // New interval applies to ticks scheduled from here on.
                if let Some(id) = self.tick_timer.take() {
                    self.timers.cancel(id);
                }
                self.tick_timer = Some(self.timers.schedule_repeating(
                    now,
                    self.pacing.tick_interval_ms(),
                    Task::Tick,
                ));

                frontend.set_score(self.score);
            }
            None => self.snake.trim_tail(),
        }

        if collision::check(&self.snake, &self.grid) {
            // No redraw for the post-collision state.
            self.end(frontend);
            return;
        }

        let segments: Vec<Cell> = self.snake.segments().collect();
        let food: Vec<Cell> = self.food.positions().collect();
        frontend.draw(&segments, &food);
    }

    /// Terminate the run: cancel every outstanding timer and enter
    /// game over.
    fn end(&mut self, frontend: &mut dyn Frontend) {
        self.timers.cancel_all();
        self.tick_timer = None;
        self.phase = Phase::GameOver;
        frontend.show_game_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::NullFrontend;

    fn engine_10x10() -> GameEngine {
        GameEngine::new(Grid::new(10, 10), 12345)
    }

    #[test]
    fn new_engine_is_idle() {
        let engine = engine_10x10();
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.next_deadline(), None);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn start_arms_tick_spawn_and_elapsed_timers() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);

        assert_eq!(engine.phase(), Phase::Running);
        // Tick at 100, elapsed at 100, spawn at 1000.
        assert_eq!(engine.next_deadline(), Some(100.0));
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.snake().head(), Cell::new(5, 5));
        assert_eq!(engine.motion(), Direction::Right);
    }

    #[test]
    fn one_tick_moves_the_head_right() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        engine.advance(100.0, &mut NullFrontend);

        assert_eq!(engine.snake().head(), Cell::new(6, 5));
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.phase(), Phase::Running);
    }

    #[test]
    fn eating_grows_scores_and_repaces() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        assert!(engine.spawn_food_at(Cell::new(6, 5), 0.0));

        engine.advance(100.0, &mut NullFrontend);

        assert_eq!(engine.score(), 1);
        assert_eq!(engine.snake().len(), 2);
        assert!((engine.pacing().tick_interval_ms() - 90.0).abs() < 1e-9);
        assert!((engine.pacing().food_lifetime_ms() - 9_000.0).abs() < 1e-9);
        assert!(engine.food().is_empty());
    }

    #[test]
    fn repaced_tick_fires_at_the_new_interval() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        engine.spawn_food_at(Cell::new(6, 5), 0.0);

        engine.advance(100.0, &mut NullFrontend);
        // Next tick is rescheduled from t=100 at 90ms.
        engine.advance(189.0, &mut NullFrontend);
        assert_eq!(engine.snake().head(), Cell::new(6, 5));

        engine.advance(190.0, &mut NullFrontend);
        assert_eq!(engine.snake().head(), Cell::new(7, 5));
    }

    #[test]
    fn wall_hit_ends_the_run_and_cancels_everything() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);

        // Head starts at (5,5) moving right; the fifth tick leaves the grid.
        for step in 1..=5 {
            engine.advance(step as f64 * 100.0, &mut NullFrontend);
        }

        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.next_deadline(), None);
    }

    #[test]
    fn input_after_game_over_is_ignored() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        for step in 1..=5 {
            engine.advance(step as f64 * 100.0, &mut NullFrontend);
        }
        assert_eq!(engine.phase(), Phase::GameOver);

        engine.propose_direction(Direction::Up);
        engine.advance(10_000.0, &mut NullFrontend);
        assert_eq!(engine.phase(), Phase::GameOver);
    }

    #[test]
    fn restart_after_game_over_resets_the_run() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        engine.spawn_food_at(Cell::new(6, 5), 0.0);
        engine.advance(100.0, &mut NullFrontend);
        assert_eq!(engine.score(), 1);

        engine.apply_action(GameAction::Restart, 5_000.0, &mut NullFrontend);

        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.snake().head(), Cell::new(5, 5));
        assert_eq!(engine.pacing(), PacingState::default());
        assert!(engine.food().is_empty());
        assert_eq!(engine.next_deadline(), Some(5_100.0));
    }

    #[test]
    fn spawner_drops_attempts_on_the_snake() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);

        assert!(!engine.spawn_food_at(Cell::new(5, 5), 0.0));
        assert!(engine.food().is_empty());
    }

    #[test]
    fn expired_food_cannot_later_be_eaten() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        // Backdate the spawn so its 10s deadline lands at t=150, between
        // the first and second ticks.
        assert!(engine.spawn_food_at(Cell::new(7, 5), -9_850.0));
        assert_eq!(engine.food().len(), 1);

        engine.advance(150.0, &mut NullFrontend);
        assert!(engine.food().is_empty());
        assert_eq!(engine.score(), 0);

        // The head walks over the expired cell with no effect.
        engine.advance(200.0, &mut NullFrontend);
        assert_eq!(engine.snake().head(), Cell::new(7, 5));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.snake().len(), 1);
    }

    #[test]
    fn eat_wins_an_exact_deadline_tie_with_expiry() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        // Expiry deadline dead on the first tick: the tick entry was armed
        // first, so the eat happens and cancels the expiry.
        assert!(engine.spawn_food_at(Cell::new(6, 5), -9_900.0));

        engine.advance(100.0, &mut NullFrontend);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.snake().len(), 2);
        assert!(engine.food().is_empty());
    }

    #[test]
    fn food_expiry_is_canceled_by_game_over() {
        let mut engine = engine_10x10();
        engine.start(0.0, &mut NullFrontend);
        engine.spawn_food_at(Cell::new(0, 0), 0.0);

        for step in 1..=5 {
            engine.advance(step as f64 * 100.0, &mut NullFrontend);
        }
        assert_eq!(engine.phase(), Phase::GameOver);
        // The food's expiry entry died with the run.
        assert_eq!(engine.next_deadline(), None);
    }
}
