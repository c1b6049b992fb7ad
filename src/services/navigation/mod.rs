//! Navigation system
//!
//! One-sector moves inside the active quadrant, travel between quadrants,
//! and starbase docking.

mod docking;

pub use docking::resupply_if_docked;

use crate::models::constants::NAVIGATION_COST_PER_QUADRANT;
use crate::models::direction::Direction;
use crate::models::errors::{CommandError, GameResult};
use crate::models::galaxy::{ActiveQuadrant, Galaxy};
use crate::models::position::QuadrantPosition;
use crate::services::turn;

/// Move the Enterprise one sector.
///
/// A successful move costs energy according to the shield setting. Holding
/// still, running into an occupied sector or the edge of the grid costs
/// nothing. Returns whether the ship moved.
pub fn move_player(ctx: &mut ActiveQuadrant, direction: Direction) -> bool {
    if direction.is_hold() {
        return false;
    }
    let from = ctx.player.sector();
    let to = from.step(direction);
    let cost = ctx.player.move_cost();
    if ctx.quadrant.map.move_entity(from, to, ctx.player) {
        ctx.player.spend_energy(cost);
        true
    } else {
        false
    }
}

/// Energy needed to travel between two quadrants: 100 per quadrant of
/// straight-line distance, truncated.
pub fn trip_cost(from: QuadrantPosition, to: QuadrantPosition) -> i32 {
    (from.distance_to(to) * NAVIGATION_COST_PER_QUADRANT) as i32
}

/// Warps the Enterprise to another quadrant
///
/// # Arguments
///
/// * `galaxy` - The game galaxy state
/// * `destination` - Target quadrant (0-based)
///
/// # Returns
///
/// * `Ok(())` after arriving and running one full turn in the new quadrant
/// * `Err(GameError::Command(ShieldsRaised))` if shields are up
/// * `Err(GameError::Command(InsufficientEnergy))` if the trip costs more
///   energy than is available; the ship stays put
/// * `Err(GameError::QuadrantOutOfRange)` for a destination outside the galaxy
pub fn navigate(galaxy: &mut Galaxy, destination: QuadrantPosition) -> GameResult<()> {
    let player = galaxy.player();
    if player.shields_raised() {
        return Err(CommandError::ShieldsRaised.into());
    }

    let cost = trip_cost(galaxy.active_position(), destination);
    if player.energy() < cost {
        return Err(CommandError::InsufficientEnergy {
            required: cost,
            available: player.energy(),
        }
        .into());
    }

    galaxy.player_mut().spend_energy(cost);
    galaxy.set_active_quadrant(destination)?;
    log::info!(
        "warped to quadrant {},{} for {} energy",
        destination.x + 1,
        destination.y + 1,
        cost
    );
    turn::update_galaxy(galaxy)
}
