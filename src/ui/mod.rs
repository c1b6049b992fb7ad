//! User interface and presentation
//!
//! This module contains presenters that handle formatting and displaying
//! game information to the player, separating presentation from business logic.

pub mod presenters;

use crate::game_engine::GameState;
use crate::io::Screen;
use crate::models::errors::GameResult;
use crate::models::galaxy::{Galaxy, View};
use presenters::{EndPresenter, GalaxyMapPresenter, QuadrantPresenter, QuitPresenter, SensorPresenter};

/// Redraw the whole screen for the current view.
pub fn draw(galaxy: &Galaxy, paused: bool, screen: &mut dyn Screen) -> GameResult<()> {
    screen.clear()?;
    match galaxy.view() {
        View::Quadrant => QuadrantPresenter::show(galaxy, paused, screen)?,
        View::GalaxyMap => GalaxyMapPresenter::show(galaxy, screen)?,
        View::LongRangeSensors => SensorPresenter::show(galaxy, screen)?,
        View::Quitting => QuitPresenter::show(screen)?,
    }
    screen.show()?;
    Ok(())
}

/// Draw the end-of-game screen. Nothing is drawn while still playing or
/// after quitting.
pub fn draw_end(state: &GameState, screen: &mut dyn Screen) -> GameResult<()> {
    screen.clear()?;
    match state {
        GameState::Victory(summary) => EndPresenter::show_victory(summary, screen)?,
        GameState::Defeat(summary) => EndPresenter::show_defeat(summary, screen)?,
        GameState::Playing | GameState::Quit => return Ok(()),
    }
    screen.show()?;
    Ok(())
}
