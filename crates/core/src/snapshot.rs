//! Read-only view of a session, polled once per frame by a presentation layer.

use serde::Serialize;

use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::pieces::{PieceDef, Shape, MAX_SHAPE_SIZE};
use crate::types::{Cell, CellStatus, PieceKind, Rgb, SessionPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
    pub x: i8,
    pub y: i8,
    pub collided: bool,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
            collided: value.collided,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

impl From<&PieceDef> for NextSnapshot {
    fn from(def: &PieceDef) -> Self {
        Self {
            kind: def.kind,
            shape: def.shape,
            color: def.color,
        }
    }
}

/// 4x4 next-piece preview, `Some(color)` where the shape is occupied
pub type Preview = [[Option<Rgb>; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub phase: SessionPhase,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: Option<u32>,
}

impl GameSnapshot {
    pub(crate) fn new(board: &Board, next: &PieceDef) -> Self {
        Self {
            board: board.clone(),
            active: None,
            next: NextSnapshot::from(next),
            phase: SessionPhase::NotStarted,
            paused: false,
            game_over: false,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: None,
        }
    }

    pub fn playable(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Board with the active piece drawn in
    ///
    /// Active cells overwrite empty or merged cells; they carry status `Clear`
    /// while falling and `Merged` once the piece is flagged collided. Cells that
    /// fall outside the board are skipped.
    pub fn render_cells(&self) -> Board {
        let mut out = self.board.clone();
        let Some(active) = self.active else {
            return out;
        };

        let status = if active.collided {
            CellStatus::Merged
        } else {
            CellStatus::Clear
        };
        for (dx, dy) in active.shape.cells() {
            let (x, y) = (active.x + dx, active.y + dy);
            let Some(existing) = out.get(x, y) else {
                continue;
            };
            if !existing.occupied || existing.status == CellStatus::Merged {
                out.set(
                    x,
                    y,
                    Cell {
                        occupied: true,
                        status,
                        color: Some(active.color),
                    },
                );
            }
        }
        out
    }

    /// Next piece laid out in a 4x4 preview grid, top-left aligned
    pub fn next_preview(&self) -> Preview {
        let mut out = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (x, y) in self.next.shape.cells() {
            out[y as usize][x as usize] = Some(self.next.color);
        }
        out
    }
}
