//! Collision module - the single authority on placement legality
//!
//! A placement is illegal as soon as one occupied cell of the shape lands outside
//! the board or on a cell that is not tagged clear.

use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::pieces::Shape;

/// Would `piece` collide after moving by `(dx, dy)`?
pub fn collides(piece: &ActivePiece, board: &Board, dx: i8, dy: i8) -> bool {
    shape_collides(&piece.shape, piece.x, piece.y, board, dx, dy)
}

/// Same as [`collides`] for a bare shape at `(x, y)`
pub fn shape_collides(shape: &Shape, x: i8, y: i8, board: &Board, dx: i8, dy: i8) -> bool {
    shape
        .cells()
        .iter()
        .any(|&(cx, cy)| !board.is_clear(x + cx + dx, y + cy + dy))
}
