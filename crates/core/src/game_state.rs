//! Game state module - the session state machine
//!
//! This module ties together the board, the piece catalog, rotation, collision and
//! scoring. Every mutation goes through one of the intents (`start`, `toggle_pause`,
//! `move_horizontal`, `rotate`, `soft_drop`, `hard_drop`) or the automatic `tick`.
//!
//! A piece that can no longer fall is only flagged `collided`; it is merged into the
//! board, rows are swept, scored, and the next piece is spawned at the beginning of
//! the following intent or tick. In between, snapshots show the piece in its final
//! position with `collided == true`.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::collision::{collides, shape_collides};
use crate::pieces::{piece_def, PieceDef, Shape};
use crate::rng::PieceSource;
use crate::rotation::rotate;
use crate::scoring::{
    drop_interval_ms, drop_score, level_after_lock, line_clear_score, tick_levels_up,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::*;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Copy of the catalog shape, possibly rotated
    pub shape: Shape,
    pub color: Rgb,
    pub x: i8,
    pub y: i8,
    /// The placement is final and will be merged on the next update
    pub collided: bool,
}

impl ActivePiece {
    /// Create a piece of `kind` at the spawn offset
    pub fn spawn(kind: PieceKind) -> Self {
        Self::from_def(piece_def(kind))
    }

    pub fn from_def(def: &PieceDef) -> Self {
        Self {
            kind: def.kind,
            shape: def.shape,
            color: def.color,
            x: SPAWN_X,
            y: SPAWN_Y,
            collided: false,
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    pieces: PieceSource,
    phase: SessionPhase,
    /// Incremented by every `start()`.
    episode_id: u32,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a session on a standard 10x20 board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board_size(seed, BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a session on a custom-sized board
    pub fn with_board_size(seed: u32, width: u8, height: u8) -> Self {
        let mut pieces = PieceSource::new(seed);
        let next = pieces.draw();

        Self {
            board: Board::with_size(width, height),
            active: None,
            next,
            pieces,
            phase: SessionPhase::NotStarted,
            episode_id: 0,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: drop_interval_ms(0),
            last_event: None,
        }
    }

    /// Reset everything and begin a new game
    ///
    /// Valid from any phase; this is the only way out of `GameOver`.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.active = Some(ActivePiece::spawn(self.pieces.draw()));
        self.next = self.pieces.draw();
        self.drop_interval_ms = drop_interval_ms(0);
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = SessionPhase::Running;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != SessionPhase::NotStarted
    }

    pub fn running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Replace the falling piece (scenario setup)
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn next_piece(&self) -> &'static PieceDef {
        piece_def(self.next)
    }

    /// Interval until the next automatic tick
    ///
    /// `None` whenever no tick must be scheduled (not started, paused, game over).
    pub fn drop_interval_ms(&self) -> Option<u32> {
        self.running().then_some(self.drop_interval_ms)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Toggle `Running ⇄ Paused`; ignored in every other phase
    pub fn toggle_pause(&mut self) -> bool {
        self.settle();
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                true
            }
            SessionPhase::Paused => {
                self.drop_interval_ms = drop_interval_ms(self.level);
                self.phase = SessionPhase::Running;
                true
            }
            SessionPhase::NotStarted | SessionPhase::GameOver => false,
        }
    }

    /// Automatic gravity step
    ///
    /// Returns true if the active piece moved down.
    pub fn tick(&mut self) -> bool {
        self.settle();
        if !self.running() {
            return false;
        }

        if tick_levels_up(self.lines, self.level) {
            self.level += 1;
            self.drop_interval_ms = drop_interval_ms(self.level);
        }

        let Some(mut active) = self.active else {
            return false;
        };

        if !collides(&active, &self.board, 0, 1) {
            active.y += 1;
            active.collided = false;
            self.active = Some(active);
            return true;
        }

        if active.y < 1 {
            // Blocked while still at the spawn row.
            self.phase = SessionPhase::GameOver;
            return false;
        }

        active.collided = true;
        self.active = Some(active);
        false
    }

    /// Shift the active piece one column (`dir` < 0 left, > 0 right)
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        self.settle();
        if !self.running() {
            return false;
        }
        let dx = dir.signum();
        self.commit_if_legal(|piece| ActivePiece {
            x: piece.x + dx,
            collided: false,
            ..piece
        })
    }

    /// Rotate in place; fails silently on collision (no wall kicks)
    pub fn rotate(&mut self, dir: RotateDir) -> bool {
        self.settle();
        if !self.running() {
            return false;
        }
        self.commit_if_legal(|piece| ActivePiece {
            shape: rotate(&piece.shape, dir),
            ..piece
        })
    }

    /// One manual tick plus a soft-drop point
    pub fn soft_drop(&mut self) -> bool {
        self.settle();
        if !self.running() {
            return false;
        }
        let moved = self.tick();
        self.score = self.score.saturating_add(drop_score(1, false));
        moved
    }

    /// Drop to the lowest legal row and flag the piece for merging
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        self.settle();
        if !self.running() {
            return 0;
        }
        let Some(mut active) = self.active else {
            return 0;
        };

        let mut distance: i8 = 0;
        while !collides(&active, &self.board, 0, distance + 1) {
            distance += 1;
        }

        active.y += distance;
        active.collided = true;
        self.active = Some(active);

        let rows = distance as u32;
        self.score = self.score.saturating_add(drop_score(rows, true));
        rows
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.rotate(RotateDir::Clockwise),
            GameAction::RotateCcw => self.rotate(RotateDir::CounterClockwise),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Merge a collided piece, sweep and score rows, and spawn the next piece
    ///
    /// Runs at the top of every intent; returns the lock event if a merge happened.
    pub fn settle(&mut self) -> Option<LockEvent> {
        if self.game_over() {
            return None;
        }
        let active = self.active.filter(|piece| piece.collided)?;

        self.board
            .lock_piece(&active.shape, active.x, active.y, active.color);

        let cleared = self.board.clear_full_rows();
        let line_score = line_clear_score(cleared, self.level);
        if cleared > 0 {
            self.score = self.score.saturating_add(line_score);
            self.lines = self.lines.saturating_add(cleared as u32);
        }

        let level = level_after_lock(self.lines, self.level);
        if level != self.level {
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(level);
        }

        self.active = Some(ActivePiece::spawn(self.next));
        self.next = self.pieces.draw();

        let event = LockEvent {
            lines_cleared: cleared as u32,
            line_clear_score: line_score,
            score: self.score,
            lines: self.lines,
            level: self.level,
        };
        self.last_event = Some(event);
        Some(event)
    }

    /// Does the active piece collide at its current position?
    pub fn active_collides(&self) -> bool {
        self.active.is_some_and(|piece| {
            shape_collides(&piece.shape, piece.x, piece.y, &self.board, 0, 0)
        })
    }

    fn commit_if_legal(&mut self, change: impl FnOnce(ActivePiece) -> ActivePiece) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = change(active);
        if collides(&candidate, &self.board, 0, 0) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = NextSnapshot::from(self.next_piece());
        out.phase = self.phase;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(&self.board, self.next_piece());
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
