//! Runtime configuration for the terminal binary.
//!
//! Values come from the environment first and are then overridden by
//! command-line flags.

use anyhow::{anyhow, Result};

/// Default board cell width in terminal columns.
pub const DEFAULT_CELL_WIDTH: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Piece RNG seed; `None` picks one from the clock.
    pub seed: Option<u32>,
    /// Append session events as JSON lines to this file.
    pub log_path: Option<String>,
    pub cell_width: u16,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl RunConfig {
    /// Read `TETRIS_SEED`, `TETRIS_LOG_PATH` and `TETRIS_CELL_WIDTH`.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("TETRIS_SEED").ok().and_then(|s| s.trim().parse().ok());

        let log_path = env::var("TETRIS_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let cell_width = env::var("TETRIS_CELL_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|w| (1..=4).contains(w))
            .unwrap_or(DEFAULT_CELL_WIDTH);

        Self {
            seed,
            log_path,
            cell_width,
        }
    }

    /// Environment config overridden by `args` (program name excluded).
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env();
        config.apply_args(args)?;
        Ok(config)
    }

    /// Apply `--seed N`, `--log PATH` and `--cell-width N`.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    if v.trim().is_empty() {
                        return Err(anyhow!("empty --log path"));
                    }
                    self.log_path = Some(v.clone());
                }
                "--cell-width" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --cell-width"))?;
                    let width = v
                        .parse::<u16>()
                        .ok()
                        .filter(|w| (1..=4).contains(w))
                        .ok_or_else(|| anyhow!("invalid --cell-width value (1-4): {}", v))?;
                    self.cell_width = width;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }
}
