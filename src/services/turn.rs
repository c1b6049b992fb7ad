//! Turn driver
//!
//! A full turn advances the clock, lets every hostile act and then checks
//! docking. Projectile steps run on their own, faster cadence. Both only
//! happen while the quadrant view is on screen.

use crate::models::errors::GameResult;
use crate::models::galaxy::{ActiveQuadrant, Galaxy, View};
use crate::services::combat;
use crate::services::navigation::resupply_if_docked;

/// Hostile actions followed by the docking check.
pub fn update_quadrant(ctx: &mut ActiveQuadrant) {
    combat::hostile_turn(ctx);
    resupply_if_docked(ctx);
}

/// Advance the game one full turn.
pub fn update_galaxy(galaxy: &mut Galaxy) -> GameResult<()> {
    if galaxy.view() != View::Quadrant {
        return Ok(());
    }
    galaxy.advance_stardate()?;
    let mut ctx = galaxy.active()?;
    update_quadrant(&mut ctx);
    Ok(())
}

/// Advance every torpedo in the active quadrant one sector.
pub fn update_torpedoes(galaxy: &mut Galaxy) -> GameResult<()> {
    if galaxy.view() != View::Quadrant {
        return Ok(());
    }
    let mut ctx = galaxy.active()?;
    combat::update_torpedoes(&mut ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::direction::Direction;
    use crate::models::entity::{Entity, Movable};
    use crate::models::position::SectorPosition;
    use crate::models::sector_map::SectorMap;
    use crate::models::starbase::Starbase;
    use crate::models::torpedo::{Torpedo, TorpedoOrigin};

    fn cleared_galaxy() -> Galaxy {
        let mut galaxy = Galaxy::new(11, 25, 5).unwrap();
        let mut ctx = galaxy.active().unwrap();
        ctx.quadrant.map = SectorMap::new();
        ctx.quadrant.hostiles = 0;
        let at = SectorPosition::new(4, 4);
        ctx.player.move_to(at);
        ctx.quadrant.map.place(at, Entity::Player);
        galaxy
    }

    #[test]
    fn full_turn_advances_clock_and_docks() {
        let mut galaxy = cleared_galaxy();
        let base = SectorPosition::new(4, 3);
        {
            let mut ctx = galaxy.active().unwrap();
            ctx.quadrant.map.place(base, Entity::Starbase(Starbase::new(base)));
            ctx.player.set_energy(1000);
        }
        let before = galaxy.stardate().tenths();

        update_galaxy(&mut galaxy).unwrap();

        assert_eq!(galaxy.stardate().tenths(), before + 1);
        assert_eq!(galaxy.player().energy(), 2250);
    }

    #[test]
    fn time_stands_still_in_overlays() {
        let mut galaxy = cleared_galaxy();
        galaxy
            .active_quadrant_mut()
            .unwrap()
            .map
            .put_torpedo(Torpedo::new(
                SectorPosition::new(0, 0),
                Direction::North,
                TorpedoOrigin::Player,
            ));
        let before = galaxy.stardate();

        for view in [View::GalaxyMap, View::LongRangeSensors, View::Quitting] {
            galaxy.set_view(view);
            update_galaxy(&mut galaxy).unwrap();
            update_torpedoes(&mut galaxy).unwrap();
        }

        assert_eq!(galaxy.stardate(), before);
        let map = &galaxy.active_quadrant().unwrap().map;
        assert!(map.torpedo_at(SectorPosition::new(0, 0)).is_some());
    }

    #[test]
    fn torpedo_step_moves_one_sector() {
        let mut galaxy = cleared_galaxy();
        galaxy
            .active_quadrant_mut()
            .unwrap()
            .map
            .put_torpedo(Torpedo::new(
                SectorPosition::new(0, 0),
                Direction::North,
                TorpedoOrigin::Player,
            ));

        update_torpedoes(&mut galaxy).unwrap();

        let map = &galaxy.active_quadrant().unwrap().map;
        assert!(map.torpedo_at(SectorPosition::new(0, 0)).is_none());
        assert!(map.torpedo_at(SectorPosition::new(0, 1)).is_some());
    }

    #[test]
    fn messages_expire_with_the_clock() {
        let mut galaxy = cleared_galaxy();
        galaxy.active().unwrap().log("Torpedo fired!");
        for _ in 0..4 {
            update_galaxy(&mut galaxy).unwrap();
        }
        assert!(galaxy.active_quadrant().unwrap().messages.contains("Torpedo fired!"));
        update_galaxy(&mut galaxy).unwrap();
        assert!(!galaxy.active_quadrant().unwrap().messages.contains("Torpedo fired!"));
    }
}
