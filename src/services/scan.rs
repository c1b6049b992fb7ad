//! Sensor and computer displays
//!
//! Both are overlay views: the clock stops while they are open and any key
//! closes them.

use crate::models::errors::GameResult;
use crate::models::galaxy::{Galaxy, View};
use crate::models::input_state::InputState;

/// Long-range sensors: reveal the 3x3 block around the ship and show it.
pub fn open_long_range_sensors(galaxy: &mut Galaxy) -> GameResult<()> {
    galaxy.scan_neighbors();
    galaxy.active_quadrant_mut()?.panel.set_state(InputState::Sensors);
    galaxy.set_view(View::LongRangeSensors);
    log::debug!("long-range scan at stardate {}", galaxy.stardate());
    Ok(())
}

/// Ship's computer: the galaxy map of every scanned quadrant.
pub fn open_galaxy_map(galaxy: &mut Galaxy) -> GameResult<()> {
    galaxy.active_quadrant_mut()?.panel.set_state(InputState::Computer);
    galaxy.set_view(View::GalaxyMap);
    Ok(())
}

/// Return to the quadrant view with the command panel reset.
pub fn close_overlay(galaxy: &mut Galaxy) -> GameResult<()> {
    galaxy.active_quadrant_mut()?.panel.set_state(InputState::Normal);
    galaxy.set_view(View::Quadrant);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::QuadrantPosition;

    #[test]
    fn sensors_reveal_neighbours() {
        let mut galaxy = Galaxy::new(42, 25, 5).unwrap();
        let center = galaxy.active_position();
        open_long_range_sensors(&mut galaxy).unwrap();

        assert_eq!(galaxy.view(), View::LongRangeSensors);
        assert_eq!(
            galaxy.active_quadrant().unwrap().panel.state(),
            InputState::Sensors
        );
        for dy in -1..=1 {
            for dx in -1..=1 {
                let pos = QuadrantPosition::new(center.x + dx, center.y + dy);
                if let Some(q) = galaxy.quadrant(pos) {
                    assert!(q.scanned);
                }
            }
        }
    }

    #[test]
    fn galaxy_map_round_trip() {
        let mut galaxy = Galaxy::new(42, 25, 5).unwrap();
        open_galaxy_map(&mut galaxy).unwrap();
        assert_eq!(galaxy.view(), View::GalaxyMap);
        assert_eq!(
            galaxy.active_quadrant().unwrap().panel.state(),
            InputState::Computer
        );

        close_overlay(&mut galaxy).unwrap();
        assert_eq!(galaxy.view(), View::Quadrant);
        assert_eq!(
            galaxy.active_quadrant().unwrap().panel.state(),
            InputState::Normal
        );
    }
}
