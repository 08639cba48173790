//! Pieces module - occupancy matrices and the static piece catalog
//!
//! Every piece is a small square 0/1 matrix plus a display color. The catalog is
//! immutable; active pieces copy the shape before transforming it.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::rng::SimpleRng;
use crate::types::{PieceKind, Rgb};

/// Largest side length of a shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of an occupied cell inside a shape, `(x, y)`
pub type CellOffset = (i8, i8);

/// Square occupancy matrix, stored in a fixed 4x4 buffer
///
/// Only the top-left `size x size` block is meaningful; the rest stays zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    size: u8,
    rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from an `N x N` matrix
    pub const fn square<const N: usize>(matrix: [[u8; N]; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE, "shape must be 1x1 up to 4x4");
        let mut rows = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                rows[y][x] = (matrix[y][x] != 0) as u8;
                x += 1;
            }
            y += 1;
        }
        Self { size: N as u8, rows }
    }

    /// Build a shape from row slices
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, larger than 4x4, or not square.
    pub fn from_rows(matrix: &[&[u8]]) -> Self {
        let n = matrix.len();
        assert!(n > 0 && n <= MAX_SHAPE_SIZE, "shape must be 1x1 up to 4x4");
        assert!(
            matrix.iter().all(|row| row.len() == n),
            "shape matrix must be square"
        );

        let mut rows = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in matrix.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                rows[y][x] = (v != 0) as u8;
            }
        }
        Self { size: n as u8, rows }
    }

    pub const fn size(&self) -> usize {
        self.size as usize
    }

    /// Value at column `x`, row `y` (0 outside the matrix)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.size() || y >= self.size() {
            return 0;
        }
        self.rows[y][x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, v: u8) {
        self.rows[y][x] = v;
    }

    /// Iterate the matrix rows, each trimmed to `size`
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let n = self.size();
        self.rows[..n].iter().map(move |row| &row[..n])
    }

    /// Offsets of the occupied cells in row-major order
    pub fn cells(&self) -> ArrayVec<CellOffset, 16> {
        let mut out = ArrayVec::new();
        for (y, row) in self.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

/// The seven pieces, in [`PieceKind::ALL`] order
pub static CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        shape: Shape::square([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Rgb::new(0x00, 0xFF, 0xFF),
    },
    PieceDef {
        kind: PieceKind::J,
        shape: Shape::square([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: Rgb::new(0x00, 0x00, 0xFF),
    },
    PieceDef {
        kind: PieceKind::L,
        shape: Shape::square([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: Rgb::new(0xFF, 0xA5, 0x00),
    },
    PieceDef {
        kind: PieceKind::O,
        shape: Shape::square([[1, 1], [1, 1]]),
        color: Rgb::new(0xFF, 0xFF, 0x00),
    },
    PieceDef {
        kind: PieceKind::S,
        shape: Shape::square([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: Rgb::new(0x00, 0xFF, 0x00),
    },
    PieceDef {
        kind: PieceKind::T,
        shape: Shape::square([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: Rgb::new(0x80, 0x00, 0x80),
    },
    PieceDef {
        kind: PieceKind::Z,
        shape: Shape::square([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: Rgb::new(0xFF, 0x00, 0x00),
    },
];

/// Catalog entry for a kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    match kind {
        PieceKind::I => &CATALOG[0],
        PieceKind::J => &CATALOG[1],
        PieceKind::L => &CATALOG[2],
        PieceKind::O => &CATALOG[3],
        PieceKind::S => &CATALOG[4],
        PieceKind::T => &CATALOG[5],
        PieceKind::Z => &CATALOG[6],
    }
}

/// Uniform choice among the seven pieces, independent each call
pub fn random_piece(rng: &mut SimpleRng) -> &'static PieceDef {
    &CATALOG[rng.next_range(CATALOG.len() as u32) as usize]
}
