//! Game configuration
//!
//! Settings for one session, built from the command line and checked before
//! a galaxy is generated.

use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;

use crate::cli::Args;
use crate::models::constants::{DEFAULT_HOSTILES, DEFAULT_STARBASES, MAX_TOTAL_HOSTILES};
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::check_capacity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
    pub hostiles: u32,
    pub starbases: u32,
    /// Interval between torpedo steps.
    pub tick: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: 0,
            hostiles: DEFAULT_HOSTILES,
            starbases: DEFAULT_STARBASES,
            tick: Duration::from_millis(500),
            log_file: None,
        }
    }
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        let seed = args.seed.unwrap_or_else(|| {
            let seed = rand::thread_rng().gen();
            log::info!("no seed given, using {}", seed);
            seed
        });
        GameConfig {
            seed,
            hostiles: args.hostiles,
            starbases: args.starbases,
            tick: Duration::from_millis(args.tick_ms),
            log_file: args.log_file,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> GameResult<()> {
        if self.hostiles == 0 {
            return Err(GameError::InvalidConfig(format!(
                "hostiles must be between 1 and {}, got 0",
                MAX_TOTAL_HOSTILES
            )));
        }
        check_capacity(self.hostiles, self.starbases)?;
        if self.tick.is_zero() {
            return Err(GameError::InvalidConfig(
                "tick interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
