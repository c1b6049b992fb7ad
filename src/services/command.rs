//! Command dispatch
//!
//! Routes key presses through the active quadrant's input panel. Player
//! mistakes (`CommandError`) end up as messages in the quadrant log; only
//! faults in the game state are returned to the caller.

use crate::io::Key;
use crate::models::direction::Direction;
use crate::models::errors::{CommandError, GameError, GameResult};
use crate::models::galaxy::{Galaxy, View};
use crate::models::input_state::InputState;
use crate::models::position::QuadrantPosition;
use crate::services::{combat, navigation, scan};

/// What the caller should do after a key has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Handle one key press.
pub fn handle_key(galaxy: &mut Galaxy, key: Key) -> GameResult<KeyOutcome> {
    match dispatch(galaxy, key) {
        Err(GameError::Command(e)) => {
            log::debug!("command refused: {:?}", e);
            galaxy.active()?.log(e.to_string());
            Ok(KeyOutcome::Continue)
        }
        other => other,
    }
}

fn dispatch(galaxy: &mut Galaxy, key: Key) -> GameResult<KeyOutcome> {
    match galaxy.view() {
        View::Quitting => return Ok(confirm_quit(galaxy, key)),
        View::GalaxyMap | View::LongRangeSensors => {
            scan::close_overlay(galaxy)?;
            return Ok(KeyOutcome::Continue);
        }
        View::Quadrant => {}
    }

    let state = galaxy.active_quadrant()?.panel.state();
    if key == Key::Esc {
        if state == InputState::Normal {
            galaxy.set_view(View::Quitting);
        } else {
            galaxy.active_quadrant_mut()?.panel.set_state(InputState::Normal);
        }
        return Ok(KeyOutcome::Continue);
    }

    match state {
        InputState::Normal => normal_key(galaxy, key)?,
        InputState::Weapons => weapons_key(galaxy, key)?,
        InputState::NavigationX | InputState::NavigationY => navigation_key(galaxy, state, key)?,
        InputState::Shields | InputState::WeaponsTorpedoes | InputState::WeaponsPhasers => {
            numeric_key(galaxy, state, key)?
        }
        // Only reachable with an overlay open, which is handled above.
        InputState::Sensors | InputState::Computer => {
            galaxy.active_quadrant_mut()?.panel.set_state(InputState::Normal)
        }
    }
    Ok(KeyOutcome::Continue)
}

fn confirm_quit(galaxy: &mut Galaxy, key: Key) -> KeyOutcome {
    match key {
        Key::Char('y') | Key::Char('Y') => {
            log::info!("quit confirmed at stardate {}", galaxy.stardate());
            KeyOutcome::Quit
        }
        Key::Char('n') | Key::Char('N') | Key::Esc => {
            galaxy.set_view(View::Quadrant);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn normal_key(galaxy: &mut Galaxy, key: Key) -> GameResult<()> {
    let Key::Char(c) = key else {
        return Ok(());
    };

    if let Some(digit) = c.to_digit(10) {
        if let Ok(direction) = Direction::from_digit(digit as i32) {
            navigation::move_player(&mut galaxy.active()?, direction);
        }
        return Ok(());
    }

    match c.to_ascii_lowercase() {
        's' => galaxy.active_quadrant_mut()?.panel.set_state(InputState::Shields),
        'w' => galaxy.active_quadrant_mut()?.panel.set_state(InputState::Weapons),
        'n' => {
            if galaxy.player().shields_raised() {
                return Err(CommandError::ShieldsRaised.into());
            }
            galaxy.active_quadrant_mut()?.panel.set_state(InputState::NavigationX);
        }
        'l' => scan::open_long_range_sensors(galaxy)?,
        'c' => scan::open_galaxy_map(galaxy)?,
        _ => {}
    }
    Ok(())
}

fn weapons_key(galaxy: &mut Galaxy, key: Key) -> GameResult<()> {
    let next = match key {
        Key::Char('p') | Key::Char('P') => InputState::WeaponsPhasers,
        Key::Char('t') | Key::Char('T') => InputState::WeaponsTorpedoes,
        _ => return Ok(()),
    };
    galaxy.active_quadrant_mut()?.panel.set_state(next);
    Ok(())
}

/// Destination entry: one keypress per coordinate, 1-8 each.
fn navigation_key(galaxy: &mut Galaxy, state: InputState, key: Key) -> GameResult<()> {
    let Some(value) = quadrant_digit(key) else {
        return Ok(());
    };

    let panel = &mut galaxy.active_quadrant_mut()?.panel;
    if state == InputState::NavigationX {
        panel.set_state(InputState::NavigationY);
        panel.set_destination_x(value);
        return Ok(());
    }

    let destination_x = panel.destination_x();
    panel.set_state(InputState::Normal);
    let Some(x) = destination_x else {
        return Ok(());
    };
    navigation::navigate(galaxy, QuadrantPosition::new(x - 1, value - 1))
}

fn quadrant_digit(key: Key) -> Option<i32> {
    match key {
        Key::Char(c @ '1'..='8') => c.to_digit(10).map(|d| d as i32),
        _ => None,
    }
}

/// Free-form numeric entry for shields, torpedo course and phaser energy.
fn numeric_key(galaxy: &mut Galaxy, state: InputState, key: Key) -> GameResult<()> {
    let panel = &mut galaxy.active_quadrant_mut()?.panel;
    match key {
        Key::Char(c) => {
            panel.push_digit(c);
            Ok(())
        }
        Key::Backspace => {
            panel.backspace();
            Ok(())
        }
        Key::Enter => {
            let Some(value) = panel.value() else {
                return Ok(());
            };
            panel.set_state(InputState::Normal);
            commit(galaxy, state, value)
        }
        Key::Esc | Key::Other => Ok(()),
    }
}

fn commit(galaxy: &mut Galaxy, state: InputState, value: i32) -> GameResult<()> {
    let mut ctx = galaxy.active()?;
    match state {
        InputState::Shields => combat::commit_shields(ctx.player, value),
        InputState::WeaponsTorpedoes => combat::fire_player_torpedo(&mut ctx, value)?,
        InputState::WeaponsPhasers => combat::fire_phasers(&mut ctx, value)?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entity::{Entity, Movable};
    use crate::models::position::SectorPosition;
    use crate::models::sector_map::SectorMap;

    fn galaxy() -> Galaxy {
        let mut galaxy = Galaxy::new(21, 25, 5).unwrap();
        let mut ctx = galaxy.active().unwrap();
        ctx.quadrant.map = SectorMap::new();
        ctx.quadrant.hostiles = 0;
        let at = SectorPosition::new(4, 4);
        ctx.player.move_to(at);
        ctx.quadrant.map.place(at, Entity::Player);
        galaxy
    }

    fn press_all(galaxy: &mut Galaxy, keys: &[Key]) {
        for &key in keys {
            assert_eq!(handle_key(galaxy, key).unwrap(), KeyOutcome::Continue);
        }
    }

    fn state(galaxy: &Galaxy) -> InputState {
        galaxy.active_quadrant().unwrap().panel.state()
    }

    #[test]
    fn digits_move_the_ship() {
        let mut g = galaxy();
        press_all(&mut g, &[Key::Char('8'), Key::Char('6'), Key::Char('5')]);
        assert_eq!(g.player().sector(), SectorPosition::new(5, 5));
        assert_eq!(state(&g), InputState::Normal);
    }

    #[test]
    fn shields_entry_commits_on_enter() {
        let mut g = galaxy();
        g.player_mut().set_energy(3000);
        press_all(
            &mut g,
            &[
                Key::Char('s'),
                Key::Char('5'),
                Key::Char('x'),
                Key::Char('0'),
                Key::Char('0'),
                Key::Char('0'),
                Key::Enter,
            ],
        );
        assert_eq!(g.player().shields(), 3000);
        assert_eq!(g.player().energy(), 0);
        assert_eq!(state(&g), InputState::Normal);
    }

    #[test]
    fn backspace_and_empty_enter() {
        let mut g = galaxy();
        press_all(&mut g, &[Key::Char('s'), Key::Enter]);
        assert_eq!(state(&g), InputState::Shields);
        press_all(&mut g, &[Key::Char('9'), Key::Char('1'), Key::Backspace]);
        assert_eq!(g.active_quadrant().unwrap().panel.buffer(), "9");
    }

    #[test]
    fn escape_aborts_without_committing() {
        let mut g = galaxy();
        let energy = g.player().energy();
        press_all(&mut g, &[Key::Char('s'), Key::Char('1'), Key::Esc]);
        assert_eq!(state(&g), InputState::Normal);
        assert_eq!(g.player().energy(), energy);
        assert_eq!(g.view(), View::Quadrant);
    }

    #[test]
    fn navigation_refused_with_shields_raised() {
        let mut g = galaxy();
        g.player_mut().set_shields(200);
        press_all(&mut g, &[Key::Char('n')]);
        assert_eq!(state(&g), InputState::Normal);
        assert!(g
            .active_quadrant()
            .unwrap()
            .messages
            .contains("Shields must be lowered before navigating"));
    }

    #[test]
    fn navigation_takes_two_digits() {
        let mut g = galaxy();
        let from = g.active_position();
        let to = QuadrantPosition::new((from.x + 2) % 8, (from.y + 5) % 8);
        press_all(&mut g, &[Key::Char('n'), Key::Char('9'), Key::Char('0')]);
        assert_eq!(state(&g), InputState::NavigationX);

        let x = char::from_digit(to.x as u32 + 1, 10).unwrap();
        let y = char::from_digit(to.y as u32 + 1, 10).unwrap();
        press_all(&mut g, &[Key::Char(x)]);
        assert_eq!(state(&g), InputState::NavigationY);
        press_all(&mut g, &[Key::Char(y)]);

        assert_eq!(g.active_position(), to);
        assert_eq!(state(&g), InputState::Normal);
    }

    #[test]
    fn failed_torpedo_is_logged() {
        let mut g = galaxy();
        press_all(
            &mut g,
            &[Key::Char('w'), Key::Char('t'), Key::Char('5'), Key::Enter],
        );
        assert_eq!(state(&g), InputState::Normal);
        assert!(g
            .active_quadrant()
            .unwrap()
            .messages
            .contains("Torpedo course must be 1-9, excluding 5"));
    }

    #[test]
    fn phasers_report_inoperative() {
        let mut g = galaxy();
        press_all(
            &mut g,
            &[Key::Char('W'), Key::Char('P'), Key::Char('2'), Key::Enter],
        );
        assert!(g
            .active_quadrant()
            .unwrap()
            .messages
            .contains("Phasers are not operational"));
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut g = galaxy();
        press_all(&mut g, &[Key::Esc]);
        assert_eq!(g.view(), View::Quitting);
        press_all(&mut g, &[Key::Char('x'), Key::Char('n')]);
        assert_eq!(g.view(), View::Quadrant);
        press_all(&mut g, &[Key::Esc, Key::Esc]);
        assert_eq!(g.view(), View::Quadrant);
        press_all(&mut g, &[Key::Esc]);
        assert_eq!(handle_key(&mut g, Key::Char('y')).unwrap(), KeyOutcome::Quit);
    }

    #[test]
    fn any_key_closes_overlays() {
        let mut g = galaxy();
        press_all(&mut g, &[Key::Char('l')]);
        assert_eq!(g.view(), View::LongRangeSensors);
        press_all(&mut g, &[Key::Char('8')]);
        assert_eq!(g.view(), View::Quadrant);
        assert_eq!(g.player().sector(), SectorPosition::new(4, 4));

        press_all(&mut g, &[Key::Char('c')]);
        assert_eq!(g.view(), View::GalaxyMap);
        press_all(&mut g, &[Key::Enter]);
        assert_eq!(g.view(), View::Quadrant);
        assert_eq!(state(&g), InputState::Normal);
    }
}
