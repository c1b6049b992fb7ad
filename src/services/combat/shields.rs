use crate::models::enterprise::Enterprise;

/// Sets the shield level from the player's numeric entry
///
/// Energy and shields form one pool. Shields are set to `requested` and the
/// rest of the pool becomes energy; a request larger than the pool moves
/// everything into shields.
pub fn commit_shields(player: &mut Enterprise, requested: i32) {
    let pool = player.energy() + player.shields();
    player.allocate_shields(requested);
    log::debug!(
        "shields set to {} of {} (requested {})",
        player.shields(),
        pool,
        requested
    );
}
