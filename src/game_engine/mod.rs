//! Game state machine
//!
//! Manages the overall game state, checking for victory and defeat conditions.
//! The GameEngine owns the Galaxy and tracks whether the game is still being played.

use crate::config::GameConfig;
use crate::io::InputEvent;
use crate::models::errors::GameResult;
use crate::models::galaxy::Galaxy;
use crate::models::stardate::Stardate;
use crate::services::command::{self, KeyOutcome};
use crate::services::turn;

/// Core game engine that manages game state and victory/defeat conditions
pub struct GameEngine {
    galaxy: Galaxy,
    state: GameState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing,
    Victory(VictorySummary),
    Defeat(DefeatSummary),
    /// The player confirmed quitting.
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VictorySummary {
    pub stardate: Stardate,
    pub stardates_taken: f64,
    pub stardates_per_hostile: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefeatSummary {
    pub stardate: Stardate,
    pub hostiles_destroyed: u32,
    pub hostiles_remaining: u32,
}

impl GameEngine {
    /// Creates a new game engine with a procedurally generated galaxy
    ///
    /// # Arguments
    ///
    /// * `config` - Validated game settings, including the generation seed
    ///
    /// # Returns
    ///
    /// A new GameEngine in the Playing state, or the generation error
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        config.validate()?;
        let galaxy = Galaxy::new(config.seed, config.hostiles, config.starbases)?;
        Ok(Self::from_galaxy(galaxy))
    }

    /// Wraps an existing galaxy, for tests and replays.
    pub fn from_galaxy(galaxy: Galaxy) -> Self {
        Self {
            galaxy,
            state: GameState::Playing,
        }
    }

    /// Returns an immutable reference to the galaxy
    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    /// Returns a mutable reference to the galaxy
    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    /// Returns the current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    /// One full turn.
    pub fn update(&mut self) -> GameResult<()> {
        if self.is_over() {
            return Ok(());
        }
        turn::update_galaxy(&mut self.galaxy)
    }

    /// One projectile step.
    pub fn update_torpedoes(&mut self) -> GameResult<()> {
        if self.is_over() {
            return Ok(());
        }
        turn::update_torpedoes(&mut self.galaxy)
    }

    /// Feed one input event to the command dispatcher.
    pub fn handle_event(&mut self, event: InputEvent) -> GameResult<()> {
        let InputEvent::Key(key) = event else {
            return Ok(());
        };
        if self.is_over() {
            return Ok(());
        }
        if command::handle_key(&mut self.galaxy, key)? == KeyOutcome::Quit {
            self.state = GameState::Quit;
        }
        Ok(())
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Victory, Defeat or Quit)
    /// * `None` if the game is still in progress
    ///
    /// # Defeat Conditions
    ///
    /// The player loses when the Enterprise's energy reaches zero. This is
    /// checked first, so a ship destroyed in the same step as the last
    /// hostile still loses.
    ///
    /// # Victory Conditions
    ///
    /// The player wins when no hostiles remain anywhere in the galaxy.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.state != GameState::Playing {
            return Some(self.state.clone());
        }

        let stardate = self.galaxy.stardate();

        // Defeat: no energy left
        if self.galaxy.player_destroyed() {
            let tally = self.galaxy.tally();
            self.state = GameState::Defeat(DefeatSummary {
                stardate,
                hostiles_destroyed: tally.hostiles_destroyed(),
                hostiles_remaining: tally.hostiles,
            });
            log::info!(
                "defeat at stardate {}: {} of {} hostiles destroyed",
                stardate,
                tally.hostiles_destroyed(),
                tally.starting_hostiles
            );
            return Some(self.state.clone());
        }

        // Victory: all hostiles destroyed
        if self.galaxy.all_hostiles_destroyed() {
            let taken = stardate.since(self.galaxy.starting_stardate());
            let per_hostile = match self.galaxy.starting_hostiles() {
                0 => taken,
                n => taken / n as f64,
            };
            self.state = GameState::Victory(VictorySummary {
                stardate,
                stardates_taken: taken,
                stardates_per_hostile: per_hostile,
            });
            log::info!("victory at stardate {}", stardate);
            return Some(self.state.clone());
        }

        None
    }
}
