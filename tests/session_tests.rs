//! Session driver: settling after each update and the gravity timer

use std::time::{Duration, Instant};

use classic_tetris::core::ActivePiece;
use classic_tetris::event_log::EventLog;
use classic_tetris::session::Session;
use classic_tetris::types::{Cell, GameAction, PieceKind, GAME_SPEEDS_MS};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Started session whose bottom row is full except for columns 3..7,
/// with an I at spawn above the gap.
fn session_with_i_over_gap(log: &mut EventLog, now: Instant) -> Session {
    let mut session = Session::new(42, now);
    session.apply(GameAction::Start, log, now);

    let game = session.game_mut();
    for x in (0..3).chain(7..10) {
        game.board_mut().set(x, 19, Cell::merged(None));
    }
    game.set_active(ActivePiece::spawn(PieceKind::I));
    session
}

#[test]
fn test_line_clearing_hard_drop_settles_before_next_frame() {
    let mut log = EventLog::disabled();
    let t0 = Instant::now();
    let mut session = session_with_i_over_gap(&mut log, t0);
    let next = session.game().next_kind();

    session.apply(GameAction::HardDrop, &mut log, t0 + ms(10));

    let snap = session.game().snapshot();
    assert_eq!(snap.lines, 1);
    assert_eq!(snap.score, 36 + 100);
    assert_eq!(snap.board.merged_count(), 0);
    assert!((0..10).all(|x| snap.board.get(x, 19).unwrap().is_clear()));

    let active = snap.active.unwrap();
    assert_eq!(active.kind, next);
    assert!(!active.collided);
    assert_eq!((active.x, active.y), (3, 0));
}

#[test]
fn test_tick_that_lands_a_piece_settles_it() {
    let mut log = EventLog::disabled();
    let t0 = Instant::now();
    let mut session = session_with_i_over_gap(&mut log, t0);
    let mut piece = ActivePiece::spawn(PieceKind::I);
    // Blocks on row 19, one tick away from resting
    piece.y = 18;
    session.game_mut().set_active(piece);

    assert!(session.tick_if_due(&mut log, t0 + ms(800)));

    let game = session.game();
    assert_eq!(game.lines(), 1);
    assert_eq!(game.score(), 100);
    assert!(!game.active().unwrap().collided);
}

#[test]
fn test_gravity_deadline_follows_phase() {
    let mut log = EventLog::disabled();
    let t0 = Instant::now();
    let mut session = Session::new(1, t0);
    assert_eq!(session.deadline(), None);
    assert_eq!(session.poll_timeout(t0, ms(250)), ms(250));
    assert!(!session.tick_if_due(&mut log, t0 + ms(5000)));

    session.apply(GameAction::Start, &mut log, t0);
    let interval = ms(GAME_SPEEDS_MS[0] as u64);
    assert_eq!(session.deadline(), Some(t0 + interval));
    assert_eq!(session.poll_timeout(t0 + ms(300), ms(250)), interval - ms(300));

    // Moves do not reset the timer
    session.apply(GameAction::MoveLeft, &mut log, t0 + ms(100));
    assert_eq!(session.deadline(), Some(t0 + interval));

    assert!(!session.tick_if_due(&mut log, t0 + interval - ms(1)));
    assert!(session.tick_if_due(&mut log, t0 + interval));
    assert_eq!(session.deadline(), Some(t0 + interval * 2));
    assert_eq!(session.poll_timeout(t0 + interval * 3, ms(250)), Duration::ZERO);

    let paused_at = t0 + ms(900);
    session.apply(GameAction::Pause, &mut log, paused_at);
    assert_eq!(session.deadline(), None);
    assert!(!session.tick_if_due(&mut log, paused_at + ms(5000)));

    let resumed_at = paused_at + ms(2000);
    session.apply(GameAction::Pause, &mut log, resumed_at);
    assert_eq!(session.deadline(), Some(resumed_at + interval));
}

#[test]
fn test_lock_is_logged_by_the_intent_that_caused_it() {
    let mut path = std::env::temp_dir();
    path.push(format!("classic-tetris-session-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut log = EventLog::open(&path).unwrap();
    let t0 = Instant::now();
    let mut session = session_with_i_over_gap(&mut log, t0);
    session.apply(GameAction::HardDrop, &mut log, t0);
    assert!(log.take_failure().is_none());
    drop(log);

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "start");
    assert_eq!(lines[0]["seed"], 42);
    assert_eq!(lines[1]["event"], "lock");
    assert_eq!(lines[1]["episode_id"], 1);
    assert_eq!(lines[1]["lines_cleared"], 1);
    assert_eq!(lines[1]["score"], 136);

    let _ = std::fs::remove_file(&path);
}
