//! Terminal Tetris runner (default binary).
//!
//! Polls crossterm input until the next gravity deadline, feeds the mapped
//! action or the due tick to the session and redraws every frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use classic_tetris::config::RunConfig;
use classic_tetris::event_log::EventLog;
use classic_tetris::input::{handle_key_event, should_quit};
use classic_tetris::session::Session;
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll timeout while no gravity timer is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::load(&args)?;
    let mut log = EventLog::from_path(config.log_path.as_deref())?;
    let seed = config.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed, &mut log);

    // Restore the terminal before anything reaches stderr.
    let _ = term.exit();
    if let Some(e) = log.take_failure() {
        eprintln!("classic-tetris: event log disabled: {:#}", e);
    }
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, seed: u32, log: &mut EventLog) -> Result<()> {
    let mut session = Session::new(seed, Instant::now());

    let view = GameView::new(config.cell_width, 1);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = session.game().snapshot();

    loop {
        session.game().snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(session.poll_timeout(Instant::now(), IDLE_POLL))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action, log, Instant::now());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        session.tick_if_due(log, Instant::now());
    }
}
