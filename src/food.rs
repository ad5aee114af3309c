use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Draws food cells from a fixed square zone anchored at the origin.
///
/// The zone size is configured separately from the grid, so it may cover
/// only part of the board. Placement does not avoid the snake.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    range_cells: i32,
    rng: StdRng,
}

impl FoodPlacer {
    /// Creates a placer with an entropy-seeded rng.
    ///
    /// `range_cells` comes from [`crate::config::GameConfig::food_range_cells`]
    /// and is always positive.
    #[must_use]
    pub(crate) fn new(range_cells: i32) -> Self {
        Self::with_rng(range_cells, StdRng::from_entropy())
    }

    /// Creates a deterministic placer for tests and reproducible games.
    #[must_use]
    pub(crate) fn with_seed(range_cells: i32, seed: u64) -> Self {
        Self::with_rng(range_cells, StdRng::seed_from_u64(seed))
    }

    fn with_rng(range_cells: i32, rng: StdRng) -> Self {
        debug_assert!(range_cells > 0);

        Self { range_cells, rng }
    }

    /// Picks the next food cell.
    pub fn relocate(&mut self, grid: Grid, snake: &Snake) -> Cell {
        let food = Cell::new(
            self.rng.gen_range(0..self.range_cells),
            self.rng.gen_range(0..self.range_cells),
        );

        if !grid.contains(food) {
            debug!("food placed off the board at {food:?}");
        } else if snake.occupies(food) {
            debug!("food placed under the snake at {food:?}");
        }

        food
    }
}
