//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and session state. It has **no
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Usable behind a terminal, a browser page or a headless driver
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with row sweeping and piece stamping
//! - [`pieces`]: occupancy matrices and the static seven-piece catalog
//! - [`rotation`]: transpose-and-reverse 90° rotation
//! - [`collision`]: placement legality
//! - [`scoring`]: line-clear points, drop points, levels and drop intervals
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the session state machine
//! - [`snapshot`]: per-frame read-only view for presentation layers
//!
//! # Game Rules
//!
//! - **Randomizer**: uniform choice among the seven pieces, repeats allowed
//! - **Rotation**: plain matrix rotation, no wall kicks
//! - **Locking**: a piece that cannot fall is flagged and merged on the next update
//! - **Scoring**: 100/300/500/800 times `level + 1`, 1 point per soft-drop step,
//!   2 points per hard-drop row
//! - **Game over**: the piece is blocked before leaving the spawn row
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::GameState;
//! use classic_tetris_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! assert!(game.active().unwrap().collided);
//!
//! game.tick(); // merges the piece and moves the next one
//! assert_eq!(game.board().merged_count(), 4);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. A driver calls [`GameState::tick`] every
//! [`GameState::drop_interval_ms`] milliseconds and re-arms its timer whenever that
//! value changes; `None` means no timer.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, shape_collides};
pub use game_state::{ActivePiece, GameState};
pub use pieces::{piece_def, random_piece, PieceDef, Shape, CATALOG};
pub use rng::{PieceSource, SimpleRng};
pub use rotation::rotate;
pub use scoring::{drop_interval_ms, drop_score, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot, Preview};
