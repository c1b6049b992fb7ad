use crate::models::errors::CommandError;
use crate::models::galaxy::ActiveQuadrant;

/// Phaser banks accept an energy setting but are not operational.
pub fn fire_phasers(ctx: &mut ActiveQuadrant, energy: i32) -> Result<(), CommandError> {
    log::debug!(
        "phasers requested with {} units at stardate {}",
        energy,
        ctx.stardate
    );
    Err(CommandError::PhasersInoperative)
}
