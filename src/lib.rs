//! Classic Tetris (workspace facade crate).
//!
//! Exposes `classic_tetris::{core,input,term,types}` over the crates under
//! `crates/`, plus the binary's configuration, event log and session driver.

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;

pub mod config;
pub mod event_log;
pub mod session;
