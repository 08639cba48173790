//! Interactive session: one game, its gravity timer and its event log records.
//!
//! Every intent and every automatic tick is followed by `settle()`, so a piece
//! that came to rest is merged, swept and scored before the next frame is drawn.

use std::time::{Duration, Instant};

use crate::core::GameState;
use crate::event_log::{EventLog, SessionRecord};
use crate::types::GameAction;

pub struct Session {
    game: GameState,
    seed: u32,
    logged_episode: u32,
    game_over_logged: bool,
    interval: Option<u32>,
    deadline: Option<Instant>,
}

impl Session {
    pub fn new(seed: u32, now: Instant) -> Self {
        let game = GameState::new(seed);
        let interval = game.drop_interval_ms();
        Self {
            game,
            seed,
            logged_episode: 0,
            game_over_logged: false,
            interval,
            deadline: arm(interval, now),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Direct game access for scenario setup
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// When the next automatic tick is due; `None` while no timer runs.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// How long input may be polled before the next tick.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.deadline {
            Some(at) => at.saturating_duration_since(now),
            None => idle,
        }
    }

    /// Apply a player intent.
    pub fn apply(&mut self, action: GameAction, log: &mut EventLog, now: Instant) {
        self.game.apply_action(action);
        self.after_update(log, now, false);
    }

    /// Run the automatic tick if its deadline has passed.
    ///
    /// Returns true if a tick ran.
    pub fn tick_if_due(&mut self, log: &mut EventLog, now: Instant) -> bool {
        if !self.deadline.is_some_and(|at| now >= at) {
            return false;
        }
        self.game.tick();
        self.after_update(log, now, true);
        true
    }

    fn after_update(&mut self, log: &mut EventLog, now: Instant, ticked: bool) {
        self.game.settle();
        self.observe(log);

        // Re-arm on every tick and whenever the interval changes (level up,
        // pause, resume, start, game over).
        let current = self.game.drop_interval_ms();
        if ticked || current != self.interval {
            self.interval = current;
            self.deadline = arm(current, now);
        }
    }

    fn observe(&mut self, log: &mut EventLog) {
        if self.game.episode_id() != self.logged_episode {
            self.logged_episode = self.game.episode_id();
            self.game_over_logged = false;
            log.record(&SessionRecord::Start {
                episode_id: self.logged_episode,
                seed: self.seed,
            });
        }

        if let Some(lock) = self.game.take_last_event() {
            log.record(&SessionRecord::lock(self.logged_episode, &lock));
        }

        if self.game.game_over() && !self.game_over_logged {
            self.game_over_logged = true;
            log.record(&SessionRecord::GameOver {
                episode_id: self.logged_episode,
                score: self.game.score(),
                lines: self.game.lines(),
                level: self.game.level(),
            });
        }
    }
}

fn arm(interval: Option<u32>, now: Instant) -> Option<Instant> {
    interval.map(|ms| now + Duration::from_millis(ms as u64))
}
