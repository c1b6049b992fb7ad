use std::collections::HashSet;

use rand::Rng;

use crate::models::constants::{HOSTILE_ACTION_PERCENT, HOSTILE_FIRE_PERCENT};
use crate::models::direction::Direction;
use crate::models::entity::Entity;
use crate::models::galaxy::ActiveQuadrant;
use crate::models::position::SectorPosition;
use crate::models::torpedo::TorpedoOrigin;

use super::torpedoes::launch_torpedo;

/// Give every hostile in the quadrant its action for this turn.
///
/// Each hostile acts with a 66% chance; an acting hostile fires a torpedo
/// at the Enterprise 25% of the time and otherwise tries to move one sector
/// in a random direction (possibly holding still).
pub fn hostile_turn(ctx: &mut ActiveQuadrant) {
    let mut moved_into: HashSet<SectorPosition> = HashSet::new();

    for pos in ctx.quadrant.hostile_positions() {
        // Skip hostiles destroyed earlier this turn, and ships that have
        // already moved into a cell we haven't reached yet.
        if moved_into.contains(&pos) || !matches!(ctx.quadrant.map.get(pos), Some(Entity::Hostile(_)))
        {
            continue;
        }
        if ctx.rng.gen_range(0..100) >= HOSTILE_ACTION_PERCENT {
            continue;
        }

        if ctx.rng.gen_range(0..100) < HOSTILE_FIRE_PERCENT {
            hostile_fire(ctx, pos);
        } else {
            let direction = Direction::ALL[ctx.rng.gen_range(0..Direction::ALL.len())];
            let target = pos.step(direction);
            if ctx.quadrant.map.move_entity(pos, target, ctx.player) {
                moved_into.insert(target);
            }
        }
    }
}

/// Fire at the Enterprise along the compass direction closest to it.
fn hostile_fire(ctx: &mut ActiveQuadrant, from: SectorPosition) {
    let Some(target) = ctx.quadrant.map.find_player() else {
        return;
    };
    let direction = Direction::toward(target.x - from.x, target.y - from.y);
    if direction.is_hold() {
        return;
    }
    ctx.log(format!(
        "Klingon at {}, {} is firing a torpedo!",
        from.x + 1,
        from.y + 1
    ));
    launch_torpedo(ctx, from, direction, TorpedoOrigin::Hostile);
}
