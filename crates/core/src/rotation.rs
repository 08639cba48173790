//! Rotation module - 90° turns of a square occupancy matrix
//!
//! Transpose first, then either reverse every row (clockwise) or reverse the order
//! of the rows (counter-clockwise). No wall kicks: callers test the result against
//! the board and discard it on collision.

use crate::pieces::Shape;
use crate::types::RotateDir;

/// Rotate a shape by 90° in the given direction
pub fn rotate(shape: &Shape, dir: RotateDir) -> Shape {
    let n = shape.size();
    let mut out = *shape;

    for y in 0..n {
        for x in 0..n {
            // transposed[y][x] = shape[x][y]
            let (src_x, src_y) = match dir {
                // reverse each row of the transpose
                RotateDir::Clockwise => (y, n - 1 - x),
                // reverse the row order of the transpose
                RotateDir::CounterClockwise => (n - 1 - y, x),
            };
            out.set(x, y, shape.get(src_x, src_y));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece_def;
    use crate::types::PieceKind;

    #[test]
    fn t_piece_clockwise() {
        let t = piece_def(PieceKind::T).shape;
        let expected = Shape::square([[0, 1, 0], [0, 1, 1], [0, 1, 0]]);
        assert_eq!(rotate(&t, RotateDir::Clockwise), expected);
    }

    #[test]
    fn t_piece_counter_clockwise() {
        let t = piece_def(PieceKind::T).shape;
        let expected = Shape::square([[0, 1, 0], [1, 1, 0], [0, 1, 0]]);
        assert_eq!(rotate(&t, RotateDir::CounterClockwise), expected);
    }

    #[test]
    fn i_piece_clockwise_is_vertical_in_third_column() {
        let i = piece_def(PieceKind::I).shape;
        let rotated = rotate(&i, RotateDir::Clockwise);
        assert_eq!(rotated.cells().as_slice(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn one_by_one_is_fixed_point() {
        let dot = Shape::square([[1]]);
        assert_eq!(rotate(&dot, RotateDir::Clockwise), dot);
        assert_eq!(rotate(&dot, RotateDir::CounterClockwise), dot);
    }
}
