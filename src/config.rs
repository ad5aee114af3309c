use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Cell, Grid};

/// Board width in pixels.
pub const DEFAULT_BOARD_WIDTH_PX: u32 = 500;

/// Board height in pixels.
pub const DEFAULT_BOARD_HEIGHT_PX: u32 = 500;

/// Edge length of one cell (a snake segment or a food item) in pixels.
pub const DEFAULT_CELL_SIZE_PX: u32 = 10;

/// Tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 140;

/// Food lands within this many cells of the origin on each axis.
pub const DEFAULT_FOOD_RANDOM_RANGE_CELLS: u32 = 29;

/// Body length at the start of every game.
pub const DEFAULT_INITIAL_SNAKE_LENGTH: usize = 3;

/// Leading segments (head included) skipped by the self-collision check.
pub const DEFAULT_SELF_COLLISION_EXEMPT_SEGMENTS: usize = 5;

/// Head cell at the start of every game (pixel 50,50 on the default board).
pub const DEFAULT_START_CELL: Cell = Cell::new(5, 5);

/// Construction-time misconfiguration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error(
        "board {board_width_px}x{board_height_px}px holds no {cell_size_px}px cells on one axis"
    )]
    EmptyGrid {
        board_width_px: u32,
        board_height_px: u32,
        cell_size_px: u32,
    },
    #[error("grid dimension {0} does not fit the coordinate range")]
    DimensionOverflow(u32),
    #[error("initial snake length must be at least one segment")]
    ZeroInitialLength,
    #[error("initial snake length {length} exceeds the {capacity} cells of the grid")]
    InitialLengthExceedsGrid { length: usize, capacity: usize },
    #[error("initial snake body starting at ({x}, {y}) leaves the grid")]
    StartOutsideGrid { x: i32, y: i32 },
    #[error("food random range must cover at least one cell")]
    ZeroFoodRange,
    #[error("food random range {0} does not fit the coordinate range")]
    FoodRangeOverflow(u32),
    #[error("tick interval must be at least one millisecond")]
    ZeroTickInterval,
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed game configuration.
///
/// Every field has a default, so a JSON config file only needs to name the
/// values it overrides. Nothing here changes once a game is constructed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_width_px: u32,
    pub board_height_px: u32,
    pub cell_size_px: u32,
    pub tick_interval_ms: u64,
    pub food_random_range_cells: u32,
    pub initial_snake_length: usize,
    pub self_collision_exempt_segments: usize,
    pub start_cell: Cell,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width_px: DEFAULT_BOARD_WIDTH_PX,
            board_height_px: DEFAULT_BOARD_HEIGHT_PX,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            food_random_range_cells: DEFAULT_FOOD_RANDOM_RANGE_CELLS,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH,
            self_collision_exempt_segments: DEFAULT_SELF_COLLISION_EXEMPT_SEGMENTS,
            start_cell: DEFAULT_START_CELL,
        }
    }
}

impl GameConfig {
    /// Loads overrides from a JSON file on top of the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Checks the configuration and derives the board grid.
    ///
    /// The initial body extends left from the start cell, so every one of
    /// its cells must be on the board.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::from_board(self.board_width_px, self.board_height_px, self.cell_size_px)?;

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.food_range_cells()?;
        if self.initial_snake_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }
        if self.initial_snake_length > grid.total_cells() {
            return Err(ConfigError::InitialLengthExceedsGrid {
                length: self.initial_snake_length,
                capacity: grid.total_cells(),
            });
        }

        let head = self.start_cell;
        let outside = ConfigError::StartOutsideGrid {
            x: head.x,
            y: head.y,
        };
        if !grid.contains(head) {
            return Err(outside);
        }

        let tail_x = i32::try_from(self.initial_snake_length - 1)
            .ok()
            .and_then(|offset| head.x.checked_sub(offset));
        match tail_x {
            Some(x) if grid.contains(Cell::new(x, head.y)) => Ok(grid),
            _ => Err(outside),
        }
    }

    /// Food range in cells; must be positive and fit the coordinate type.
    pub fn food_range_cells(&self) -> Result<i32, ConfigError> {
        if self.food_random_range_cells == 0 {
            return Err(ConfigError::ZeroFoodRange);
        }

        i32::try_from(self.food_random_range_cells)
            .map_err(|_| ConfigError::FoodRangeOverflow(self.food_random_range_cells))
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use crate::grid::Cell;

    use super::{ConfigError, GameConfig};

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        let grid = config.validate().expect("defaults must validate");

        assert_eq!(grid.width_cells(), 50);
        assert_eq!(grid.height_cells(), 50);
        assert_eq!(config.tick_interval(), Duration::from_millis(140));
    }

    #[test]
    fn zero_sized_values_fail_fast() {
        let cases = [
            GameConfig {
                cell_size_px: 0,
                ..GameConfig::default()
            },
            GameConfig {
                board_height_px: 0,
                ..GameConfig::default()
            },
            GameConfig {
                tick_interval_ms: 0,
                ..GameConfig::default()
            },
            GameConfig {
                food_random_range_cells: 0,
                ..GameConfig::default()
            },
            GameConfig {
                initial_snake_length: 0,
                ..GameConfig::default()
            },
        ];

        for config in cases {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn initial_body_must_fit_left_of_start() {
        let config = GameConfig {
            start_cell: Cell::new(1, 5),
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutsideGrid { x: 1, y: 5 })
        ));
    }

    #[test]
    fn far_out_start_cell_is_rejected_without_overflow() {
        let config = GameConfig {
            start_cell: Cell::new(i32::MIN, 0),
            initial_snake_length: 2,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutsideGrid { x: i32::MIN, y: 0 })
        ));
    }

    #[test]
    fn food_range_beyond_coordinate_type_is_rejected() {
        let config = GameConfig {
            food_random_range_cells: u32::MAX,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FoodRangeOverflow(u32::MAX))
        ));
        assert_eq!(GameConfig::default().food_range_cells().ok(), Some(29));
    }

    #[test]
    fn start_cell_reads_from_config_file() {
        let path = unique_test_path("start");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "start_cell": { "x": 10, "y": 7 } }"#)
            .expect("test file write should succeed");

        let config = GameConfig::load_from_path(&path).expect("config should load");

        assert_eq!(config.start_cell, Cell::new(10, 7));
        cleanup_test_path(&path);
    }

    #[test]
    fn initial_length_cannot_exceed_grid() {
        let config = GameConfig {
            board_width_px: 20,
            board_height_px: 10,
            start_cell: Cell::new(1, 0),
            initial_snake_length: 3,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialLengthExceedsGrid {
                length: 3,
                capacity: 2
            })
        ));
    }

    #[test]
    fn partial_config_file_overrides_defaults() {
        let path = unique_test_path("partial");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "tick_interval_ms": 90 }"#).expect("test file write should succeed");

        let config = GameConfig::load_from_path(&path).expect("partial config should load");

        assert_eq!(config.tick_interval_ms, 90);
        assert_eq!(config.cell_size_px, GameConfig::default().cell_size_px);
        cleanup_test_path(&path);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let path = unique_test_path("unknown");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "grid_wrap": true }"#).expect("test file write should succeed");

        assert!(matches!(
            GameConfig::load_from_path(&path),
            Err(ConfigError::Parse(_))
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            GameConfig::load_from_path(&path),
            Err(ConfigError::Io(_))
        ));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join(format!("grid-snake-config-tests-{label}"))
            .join(format!("{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
