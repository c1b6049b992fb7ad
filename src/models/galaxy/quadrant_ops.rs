use rand::Rng;

use crate::models::constants::GALAXY_SIZE;
use crate::models::enterprise::Enterprise;
use crate::models::entity::{Entity, Movable};
use crate::models::position::QuadrantPosition;
use crate::models::quadrant::{Quadrant, QuadrantSummary};
use crate::models::stardate::Stardate;

/// Row-major index of a quadrant, or None outside the galaxy.
pub fn quadrant_index(pos: QuadrantPosition) -> Option<usize> {
    if pos.in_bounds() {
        Some(pos.y as usize * GALAXY_SIZE + pos.x as usize)
    } else {
        None
    }
}

/// Put the player at a random empty sector of `quadrant` and reveal it.
pub fn enter_quadrant<R: Rng + ?Sized>(
    quadrant: &mut Quadrant,
    player: &mut Enterprise,
    now: Stardate,
    rng: &mut R,
) {
    let sector = quadrant.map.random_empty_sector(rng);
    player.move_to(sector);
    quadrant.map.place(sector, Entity::Player);
    quadrant.scanned = true;
    quadrant.panel.reset();
    quadrant.messages.expire(now);
}

/// Mark `center` and its eight neighbours as scanned.
pub fn scan_neighbors(quadrants: &mut [Quadrant], center: QuadrantPosition) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let pos = QuadrantPosition::new(center.x + dx, center.y + dy);
            if let Some(q) = quadrant_index(pos).and_then(|i| quadrants.get_mut(i)) {
                q.scanned = true;
            }
        }
    }
}

/// The 3x3 block around `center`, north row first. Cells outside the galaxy
/// are None.
pub fn neighborhood(
    quadrants: &[Quadrant],
    center: QuadrantPosition,
) -> [[Option<QuadrantSummary>; 3]; 3] {
    let mut block = [[None; 3]; 3];
    for (row, dy) in [1, 0, -1].into_iter().enumerate() {
        for (col, dx) in [-1, 0, 1].into_iter().enumerate() {
            let pos = QuadrantPosition::new(center.x + dx, center.y + dy);
            block[row][col] = quadrant_index(pos)
                .and_then(|i| quadrants.get(i))
                .map(|q| q.summary(pos == center));
        }
    }
    block
}
