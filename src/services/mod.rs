//! Game services
//!
//! This module contains business logic for game operations including
//! combat, navigation, scanning, command dispatch and the main loop.

pub mod combat;
pub mod command;
pub mod game;
pub mod navigation;
pub mod scan;
pub mod turn;
