//! Combat system
//!
//! Damage resolution, torpedo physics, shield allocation, phasers and the
//! hostile AI turn.

mod klingon_attack;
mod phasers;
mod shields;
mod torpedoes;

pub use klingon_attack::hostile_turn;
pub use phasers::fire_phasers;
pub use shields::commit_shields;
pub use torpedoes::{fire_player_torpedo, launch_torpedo, update_torpedoes};

use crate::models::entity::EntityKind;
use crate::models::galaxy::ActiveQuadrant;
use crate::models::position::SectorPosition;

/// Result of applying damage to a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// The sector was empty.
    Nothing,
    Damaged(EntityKind),
    Destroyed(EntityKind),
}

/// Apply `amount` damage to whatever occupies `pos`, logging the hit.
///
/// A target whose defence value drops to zero or below is removed from the
/// grid. Destroyed hostiles and starbases are taken off both the quadrant's
/// and the galaxy's counters, so the two always agree.
pub fn damage_object_at(
    ctx: &mut ActiveQuadrant,
    pos: SectorPosition,
    amount: i32,
    source: &str,
) -> HitOutcome {
    let Some(entity) = ctx.quadrant.map.get_mut(pos) else {
        return HitOutcome::Nothing;
    };
    let kind = entity.kind();
    let target = entity.object_mut(ctx.player);
    target.take_damage(amount);
    let name = target.name();
    let destroyed = target.is_destroyed();

    ctx.log(format!(
        "{} at {}, {} took {} damage from a {}",
        name,
        pos.x + 1,
        pos.y + 1,
        amount,
        source
    ));

    if !destroyed {
        return HitOutcome::Damaged(kind);
    }

    ctx.log(format!("{} at {}, {} destroyed!", name, pos.x + 1, pos.y + 1));
    ctx.quadrant.map.remove(pos);
    match kind {
        EntityKind::Hostile => {
            ctx.quadrant.hostiles = ctx.quadrant.hostiles.saturating_sub(1);
            ctx.tally.hostile_destroyed();
        }
        EntityKind::Starbase => {
            ctx.quadrant.starbases = ctx.quadrant.starbases.saturating_sub(1);
            ctx.tally.starbase_destroyed();
        }
        EntityKind::Player => log::warn!("Enterprise destroyed at stardate {}", ctx.stardate),
        EntityKind::Star => {}
    }
    log::info!(
        "{} destroyed at {},{}; {} hostiles remain",
        name,
        pos.x + 1,
        pos.y + 1,
        ctx.tally.hostiles
    );
    HitOutcome::Destroyed(kind)
}
