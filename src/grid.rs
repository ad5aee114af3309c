use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::input::Heading;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step towards `heading`.
    #[must_use]
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Board dimensions in cells, derived once from the pixel configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Grid {
    width_cells: i32,
    height_cells: i32,
    cell_size_px: i32,
}

impl Grid {
    /// Derives the grid from board and cell pixel sizes.
    ///
    /// Partial cells at the right/bottom edge are dropped. Fails when the
    /// cell size is zero or either axis ends up with no cells at all.
    pub fn from_board(
        board_width_px: u32,
        board_height_px: u32,
        cell_size_px: u32,
    ) -> Result<Self, ConfigError> {
        if cell_size_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let width_cells = board_width_px / cell_size_px;
        let height_cells = board_height_px / cell_size_px;
        if width_cells == 0 || height_cells == 0 {
            return Err(ConfigError::EmptyGrid {
                board_width_px,
                board_height_px,
                cell_size_px,
            });
        }

        Ok(Self {
            width_cells: to_axis(width_cells)?,
            height_cells: to_axis(height_cells)?,
            cell_size_px: to_axis(cell_size_px)?,
        })
    }

    #[must_use]
    pub fn width_cells(self) -> i32 {
        self.width_cells
    }

    #[must_use]
    pub fn height_cells(self) -> i32 {
        self.height_cells
    }

    #[must_use]
    pub fn cell_size_px(self) -> i32 {
        self.cell_size_px
    }

    /// Returns true when `cell` lies on the board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width_cells && cell.y < self.height_cells
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        // Both axes are positive by construction.
        self.width_cells.unsigned_abs() as usize * self.height_cells.unsigned_abs() as usize
    }

    /// Returns the top-left pixel of `cell`.
    #[must_use]
    pub fn to_pixels(self, cell: Cell) -> (i32, i32) {
        (cell.x * self.cell_size_px, cell.y * self.cell_size_px)
    }
}

fn to_axis(value: u32) -> Result<i32, ConfigError> {
    i32::try_from(value).map_err(|_| ConfigError::DimensionOverflow(value))
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigError;
    use crate::input::Heading;

    use super::{Cell, Grid};

    #[test]
    fn default_board_yields_fifty_by_fifty_cells() {
        let grid = Grid::from_board(500, 500, 10).expect("default board is valid");

        assert_eq!(grid.width_cells(), 50);
        assert_eq!(grid.height_cells(), 50);
        assert_eq!(grid.total_cells(), 2500);
    }

    #[test]
    fn contains_checks_both_axes_half_open() {
        let grid = Grid::from_board(40, 30, 10).expect("valid board");

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(3, 2)));
        assert!(!grid.contains(Cell::new(4, 2)));
        assert!(!grid.contains(Cell::new(3, 3)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
    }

    #[test]
    fn partial_cells_are_dropped() {
        let grid = Grid::from_board(55, 19, 10).expect("valid board");

        assert_eq!(grid.width_cells(), 5);
        assert_eq!(grid.height_cells(), 1);
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        assert!(matches!(
            Grid::from_board(500, 500, 0),
            Err(ConfigError::ZeroCellSize)
        ));
    }

    #[test]
    fn board_smaller_than_one_cell_is_rejected() {
        assert!(matches!(
            Grid::from_board(500, 5, 10),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn cells_convert_to_pixel_origins() {
        let grid = Grid::from_board(500, 500, 10).expect("valid board");

        assert_eq!(grid.to_pixels(Cell::new(5, 5)), (50, 50));
        assert_eq!(grid.to_pixels(Cell::new(-1, 5)), (-10, 50));
    }

    #[test]
    fn step_applies_unit_offsets() {
        let origin = Cell::new(5, 5);

        assert_eq!(origin.step(Heading::Right), Cell::new(6, 5));
        assert_eq!(origin.step(Heading::Left), Cell::new(4, 5));
        assert_eq!(origin.step(Heading::Up), Cell::new(5, 4));
        assert_eq!(origin.step(Heading::Down), Cell::new(5, 6));
    }
}
