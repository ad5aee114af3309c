use log::{debug, info};
use serde::Serialize;

use crate::config::{ConfigError, GameConfig};
use crate::food::FoodPlacer;
use crate::grid::{Cell, Grid};
use crate::input::{DirectionArbiter, GameInput, Heading};
use crate::snake::Snake;

/// Heading of a freshly reset snake.
pub const INITIAL_HEADING: Heading = Heading::Right;

/// Coarse gameplay phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver,
}

/// Whether a game waits on a start menu or begins playing immediately.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum StartMode {
    #[default]
    Menu,
    Immediate,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Read-only copy of everything a renderer or logger needs.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub length: usize,
    pub heading: Heading,
    pub head: Cell,
    pub food: Cell,
    pub snake: Vec<Cell>,
    pub tick_count: u64,
    pub death_reason: Option<DeathReason>,
}

/// Complete mutable game state for one session.
///
/// Inbound calls take `&mut self`, so a tick and an input can never
/// interleave; queries take `&self` and never change anything.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Cell,
    arbiter: DirectionArbiter,
    phase: GamePhase,
    tick_count: u64,
    death_reason: Option<DeathReason>,
    placer: FoodPlacer,
}

impl GameState {
    /// Creates a game with an entropy-seeded food placer.
    pub fn new(config: GameConfig, mode: StartMode) -> Result<Self, ConfigError> {
        let placer = FoodPlacer::new(config.food_range_cells()?);
        Self::with_placer(config, mode, placer)
    }

    /// Creates a deterministic game for tests and reproducible simulations.
    pub fn new_with_seed(
        config: GameConfig,
        mode: StartMode,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let placer = FoodPlacer::with_seed(config.food_range_cells()?, seed);
        Self::with_placer(config, mode, placer)
    }

    fn with_placer(
        config: GameConfig,
        mode: StartMode,
        mut placer: FoodPlacer,
    ) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let snake = Snake::new(
            config.start_cell,
            config.initial_snake_length,
            grid.total_cells(),
        );
        let food = placer.relocate(grid, &snake);

        let mut state = Self {
            config,
            grid,
            snake,
            food,
            arbiter: DirectionArbiter::new(INITIAL_HEADING),
            phase: GamePhase::Menu,
            tick_count: 0,
            death_reason: None,
            placer,
        };

        if mode == StartMode::Immediate {
            state.start();
        }

        Ok(state)
    }

    /// Advances simulation by one gameplay tick.
    pub fn on_tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.tick_count += 1;

        if self.snake.head() == self.food {
            self.snake.grow();
            self.food = self.placer.relocate(self.grid, &self.snake);
            debug!(
                "food eaten, length {} next food at {:?}",
                self.snake.len(),
                self.food
            );
        }

        let heading = self.arbiter.commit();
        self.snake.advance(heading);

        if let Some(reason) = self.detect_collision() {
            self.end(reason);
        }
    }

    /// Requests a heading change for the next tick. Ignored outside play and
    /// for reversals of the current heading.
    pub fn submit_direction(&mut self, heading: Heading) {
        if self.phase != GamePhase::Playing {
            return;
        }

        if !self.arbiter.request(heading) {
            debug!(
                "rejected {heading:?} while heading {:?}",
                self.arbiter.current()
            );
        }
    }

    /// Starts a game from the menu or restarts after game over.
    pub fn submit_confirm(&mut self) {
        match self.phase {
            GamePhase::Menu | GamePhase::GameOver => self.start(),
            GamePhase::Playing => {}
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(heading) => self.submit_direction(heading),
            GameInput::Confirm => self.submit_confirm(),
            GameInput::Quit => {}
        }
    }

    #[must_use]
    pub fn current_phase(&self) -> GamePhase {
        self.phase
    }

    /// Body cells from head to tail.
    #[must_use]
    pub fn snake_cells(&self) -> &[Cell] {
        self.snake.segments()
    }

    #[must_use]
    pub fn food_cell(&self) -> Cell {
        self.food
    }

    /// Segments gained since the game started.
    #[must_use]
    pub fn score(&self) -> u32 {
        let gained = self
            .snake
            .len()
            .saturating_sub(self.config.initial_snake_length);
        u32::try_from(gained).unwrap_or(u32::MAX)
    }

    /// True while the external scheduler should keep calling `on_tick`.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Heading the next tick will move along.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.arbiter.pending()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            score: self.score(),
            length: self.snake.len(),
            heading: self.heading(),
            head: self.snake.head(),
            food: self.food,
            snake: self.snake.segments().to_vec(),
            tick_count: self.tick_count,
            death_reason: self.death_reason,
        }
    }

    /// Replaces the snake, for setting up positions in tests and demos.
    pub fn set_snake(&mut self, snake: Snake, heading: Heading) {
        self.snake = snake;
        self.arbiter = DirectionArbiter::new(heading);
    }

    /// Moves the food, for setting up positions in tests and demos.
    pub fn set_food(&mut self, food: Cell) {
        self.food = food;
    }

    fn start(&mut self) {
        self.snake = Snake::new(
            self.config.start_cell,
            self.config.initial_snake_length,
            self.grid.total_cells(),
        );
        self.arbiter = DirectionArbiter::new(INITIAL_HEADING);
        self.food = self.placer.relocate(self.grid, &self.snake);
        self.tick_count = 0;
        self.death_reason = None;
        self.phase = GamePhase::Playing;

        info!("game started, first food at {:?}", self.food);
    }

    fn end(&mut self, reason: DeathReason) {
        self.phase = GamePhase::GameOver;
        self.death_reason = Some(reason);

        info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count,
            self.score()
        );
    }

    fn detect_collision(&self) -> Option<DeathReason> {
        if self
            .snake
            .head_hits_body(self.config.self_collision_exempt_segments)
        {
            return Some(DeathReason::SelfCollision);
        }

        if !self.grid.contains(self.snake.head()) {
            return Some(DeathReason::WallCollision);
        }

        None
    }
}
