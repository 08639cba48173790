//! Scoring module - classic line-clear points and level progression
//!
//! Two level-up rules coexist on purpose:
//! - after a lock, the level catches up while `lines >= (level + 1) * LINES_PER_LEVEL`
//! - at the start of an automatic tick, one level is gained only when
//!   `lines > (level + 1) * LINES_PER_LEVEL`

use crate::types::{
    GAME_SPEEDS_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_POINTS, SOFT_DROP_POINTS,
};

/// Points for clearing `rows` rows at once at `level` (0-based)
///
/// Clears of more than four rows score as four.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    let base = LINE_POINTS[rows.min(LINE_POINTS.len()) - 1];
    base.saturating_mul(level.saturating_add(1))
}

/// Calculate drop score
/// soft drop: +1 per step
/// hard drop: +2 per row
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells.saturating_mul(HARD_DROP_POINTS)
    } else {
        cells.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Cleared-line count at which `level` is left behind
pub fn next_level_threshold(level: u32) -> u32 {
    level.saturating_add(1).saturating_mul(LINES_PER_LEVEL)
}

/// Level reached after a lock (inclusive threshold, repeated)
pub fn level_after_lock(lines: u32, mut level: u32) -> u32 {
    while lines >= next_level_threshold(level) {
        level += 1;
    }
    level
}

/// Whether the automatic tick bumps the level (strict threshold, once)
pub fn tick_levels_up(lines: u32, level: u32) -> bool {
    lines > next_level_threshold(level)
}

/// Get drop interval for a level (in milliseconds)
/// Levels past the table use its last entry
pub fn drop_interval_ms(level: u32) -> u32 {
    let last = GAME_SPEEDS_MS[GAME_SPEEDS_MS.len() - 1];
    GAME_SPEEDS_MS
        .get(level as usize)
        .copied()
        .unwrap_or(last)
}
