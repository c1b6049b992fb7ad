use crate::models::galaxy::ActiveQuadrant;

/// Resupply the Enterprise when it is docked at a starbase.
///
/// Docking needs shields at zero and a starbase directly north, south, east
/// or west. Each turn docked restores a quarter of the maximum energy and
/// torpedo load. Returns whether the ship was docked.
pub fn resupply_if_docked(ctx: &mut ActiveQuadrant) -> bool {
    if !ctx.quadrant.is_docked(ctx.player) {
        return false;
    }
    ctx.player.resupply();
    log::debug!(
        "docked: energy {}, torpedoes {}",
        ctx.player.energy(),
        ctx.player.torpedoes()
    );
    true
}
