//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is either
//! clear or a merged block with a color.
//! Uses a flat array in row-major order for better cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use serde::{Deserialize, Serialize};

use crate::pieces::Shape;
use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest supported width or height
///
/// Keeps every piece coordinate (including probe offsets) inside `i8`.
pub const MAX_DIMENSION: u8 = 64;

/// The game board - flat cell storage plus its dimensions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given size
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or larger than [`MAX_DIMENSION`].
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(
            (1..=MAX_DIMENSION).contains(&width) && (1..=MAX_DIMENSION).contains(&height),
            "board dimensions must be within 1..={MAX_DIMENSION}, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![Cell::CLEAR; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and tagged clear
    pub fn is_clear(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some_and(|cell| cell.is_clear())
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// A row is full when none of its cells is unoccupied
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.occupied))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Remove every full row, shifting the rows above down
    ///
    /// One empty row is inserted at the top for each row removed; the remaining rows
    /// keep their relative order. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        // Scan from bottom to top, compacting surviving rows downwards
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(Cell::CLEAR);
        cleared
    }

    /// Non-mutating variant of [`Board::clear_full_rows`]
    ///
    /// Returns the swept board and the number of rows removed.
    pub fn swept(&self) -> (Board, usize) {
        let mut board = self.clone();
        let cleared = board.clear_full_rows();
        (board, cleared)
    }

    /// Stamp a shape onto the board as merged cells of the given color
    ///
    /// Only the shape's occupied cells are written; every other cell is left untouched.
    /// Cells falling outside the board are skipped and make the call return false.
    pub fn lock_piece(&mut self, shape: &Shape, x: i8, y: i8, color: Rgb) -> bool {
        let mut inside = true;
        for (dx, dy) in shape.cells() {
            inside &= self.set(x + dx, y + dy, Cell::merged(Some(color)));
        }
        inside
    }

    /// Number of non-clear cells
    pub fn merged_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_clear()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to clear
    pub fn clear(&mut self) {
        self.cells.fill(Cell::CLEAR);
    }

    /// Build a board from ASCII rows, top row first
    ///
    /// `.` and ` ` are clear cells; any other character is a merged cell without color.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty, of unequal length, or larger than
    /// [`MAX_DIMENSION`] in either direction.
    pub fn from_ascii(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "at least one row is required");
        let width = rows[0].chars().count();
        assert!(
            rows.iter().all(|row| row.chars().count() == width),
            "all rows must have the same width"
        );

        let width = u8::try_from(width).expect("board width must fit in u8");
        let height = u8::try_from(rows.len()).expect("board height must fit in u8");
        // with_size bounds both dimensions by MAX_DIMENSION, so coordinates fit in i8
        let mut board = Self::with_size(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' && ch != ' ' {
                    board.set(x as i8, y as i8, Cell::merged(None));
                }
            }
        }
        board
    }

    /// Render as ASCII rows (`#` merged, `.` clear)
    pub fn to_ascii(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_clear() { '.' } else { '#' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "board height must fit in u8")]
    fn test_from_ascii_rejects_256_rows() {
        let rows = vec!["."; 256];
        let _ = Board::from_ascii(&rows);
    }

    #[test]
    #[should_panic(expected = "board dimensions must be within")]
    fn test_from_ascii_rejects_oversized_board() {
        let rows = vec!["."; 100];
        let _ = Board::from_ascii(&rows);
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_custom_size_index() {
        let board = Board::with_size(4, 3);
        assert_eq!(board.cells().len(), 12);
        assert_eq!(board.index(3, 2), Some(11));
        assert_eq!(board.index(4, 0), None);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_rejected() {
        let _ = Board::with_size(0, 20);
    }

    #[test]
    fn test_ascii_round_trip() {
        let rows = ["..#.", "####", "...."];
        let board = Board::from_ascii(&rows);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.to_ascii(), rows);
        assert_eq!(board.merged_count(), 5);
    }

    #[test]
    fn test_occupied_but_clear_cell_counts_toward_full_row() {
        // Fullness is decided by occupancy, legality by status.
        let mut board = Board::with_size(2, 1);
        board.set(0, 0, Cell::merged(None));
        board.set(
            1,
            0,
            Cell {
                occupied: true,
                ..Cell::CLEAR
            },
        );
        assert!(board.is_row_full(0));
        assert!(board.is_clear(1, 0));
    }
}
