//! Terminal presentation for the game.
//!
//! The view renders a [`GameSnapshot`](classic_tetris_core::GameSnapshot) into a
//! plain framebuffer; the renderer flushes framebuffers to a crossterm
//! terminal. Board cells are drawn two columns wide to square them up.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
