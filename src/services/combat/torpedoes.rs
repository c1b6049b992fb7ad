use crate::models::constants::TORPEDO_DAMAGE;
use crate::models::direction::Direction;
use crate::models::entity::{Movable, Named};
use crate::models::errors::CommandError;
use crate::models::galaxy::ActiveQuadrant;
use crate::models::position::SectorPosition;
use crate::models::torpedo::{Torpedo, TorpedoOrigin};

use super::damage_object_at;

/// Move one torpedo a single sector.
///
/// Returns the torpedo at its new sector while it is still in flight. A
/// torpedo that leaves the grid or strikes an object is spent.
fn advance(ctx: &mut ActiveQuadrant, mut torpedo: Torpedo) -> Option<Torpedo> {
    let next = torpedo.next_sector();
    if !next.in_bounds() {
        return None;
    }
    if ctx.quadrant.map.get(next).is_some() {
        damage_object_at(ctx, next, TORPEDO_DAMAGE, torpedo.name());
        return None;
    }
    torpedo.move_to(next);
    Some(torpedo)
}

/// One physics step for every torpedo in flight.
///
/// The layer is snapshotted first so each torpedo moves exactly once.
/// Torpedoes that end the step in the same sector destroy each other.
pub fn update_torpedoes(ctx: &mut ActiveQuadrant) {
    let in_flight = ctx.quadrant.map.take_torpedoes();
    let survivors: Vec<Torpedo> = in_flight
        .into_iter()
        .filter_map(|torpedo| advance(ctx, torpedo))
        .collect();
    for torpedo in survivors {
        ctx.quadrant.map.put_torpedo(torpedo);
    }
}

/// Launch a torpedo from `from`. It takes its first step straight away, so
/// an adjacent target is hit in the same turn.
pub fn launch_torpedo(
    ctx: &mut ActiveQuadrant,
    from: SectorPosition,
    direction: Direction,
    origin: TorpedoOrigin,
) {
    if direction.is_hold() {
        return;
    }
    if let Some(torpedo) = advance(ctx, Torpedo::new(from, direction, origin)) {
        ctx.quadrant.map.put_torpedo(torpedo);
    }
}

/// Fires a photon torpedo from the Enterprise
///
/// # Arguments
///
/// * `ctx` - The active quadrant
/// * `course` - Keypad direction typed by the player
///
/// # Returns
///
/// * `Ok(())` when the torpedo was launched
/// * `Err(CommandError::TorpedoesExpended)` unless more than one torpedo is aboard
/// * `Err(CommandError::InvalidCourse)` for anything but 1-9 excluding 5
pub fn fire_player_torpedo(ctx: &mut ActiveQuadrant, course: i32) -> Result<(), CommandError> {
    if ctx.player.torpedoes() <= 1 {
        return Err(CommandError::TorpedoesExpended);
    }
    let direction = Direction::from_digit(course)
        .ok()
        .filter(|d| !d.is_hold())
        .ok_or(CommandError::InvalidCourse(course))?;

    ctx.player.consume_torpedo();
    ctx.log("Torpedo fired!");
    let from = ctx.player.sector();
    launch_torpedo(ctx, from, direction, TorpedoOrigin::Player);
    Ok(())
}
