//! Star Trek Tactical Engine
//!
//! A real-time, terminal Star Trek game: the Enterprise hunts Klingon ships
//! across an 8x8 galaxy of 10x10 sector quadrants.
//!
//! # Overview
//!
//! The simulation advances on a fixed clock. Photon torpedoes move one
//! sector per step, and every second step is a full turn in which hostiles
//! move or fire and the Enterprise can resupply at a starbase. The player
//! steers with the numeric keypad and enters commands through a small
//! modal input panel.
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine and game-over logic
//! - [`models`] - Domain models (Galaxy, Quadrant, Enterprise, Klingon, etc.)
//! - [`services`] - Game services (combat, navigation, commands, main loop)
//! - [`io`] - Screen and input abstractions, crossterm backend
//! - [`ui`] - Presenters that draw game state
//! - [`cli`] / [`config`] - Command line and session settings
//!
//! # Example
//!
//! ```rust,no_run
//! use trek_tactical::{GameConfig, GameEngine};
//!
//! let config = GameConfig { seed: 42, ..GameConfig::default() };
//! let mut engine = GameEngine::new(&config).unwrap();
//! engine.update().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use game_engine::{DefeatSummary, GameEngine, GameState, VictorySummary};
pub use models::errors::{CommandError, GameError, GameResult};
