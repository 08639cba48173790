//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] intents. Key
//! repeat is left to the terminal: every press or auto-repeat is one intent.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, should_quit};
