use rand::Rng;

use crate::models::constants::{
    CLUSTER_THRESHOLDS, GALAXY_SIZE, MAX_HOSTILES_PER_CLUSTER, MAX_STARS_PER_QUADRANT,
    STARBASE_WITH_CLUSTER_PERCENT,
};
use crate::models::entity::Entity;
use crate::models::klingon::Klingon;
use crate::models::position::QuadrantPosition;
use crate::models::quadrant::Quadrant;
use crate::models::sector_map::SectorMap;
use crate::models::star::Star;
use crate::models::starbase::Starbase;

use super::quadrant_ops::quadrant_index;

/// Populate a fresh sector grid. Placement order is hostiles, then stars,
/// then starbases, each at a uniformly random empty sector.
pub fn populate_sector_map<R: Rng + ?Sized>(
    hostiles: u32,
    stars: u32,
    starbases: u32,
    rng: &mut R,
) -> SectorMap {
    let mut map = SectorMap::new();

    for _ in 0..hostiles {
        let pos = map.random_empty_sector(rng);
        map.place(pos, Entity::Hostile(Klingon::new(pos)));
    }

    for _ in 0..stars {
        let pos = map.random_empty_sector(rng);
        map.place(pos, Entity::Star(Star::new(pos)));
    }

    for _ in 0..starbases {
        let pos = map.random_empty_sector(rng);
        map.place(pos, Entity::Starbase(Starbase::new(pos)));
    }

    map
}

/// Roll the number of hostiles in one cluster quadrant.
fn cluster_size<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let roll = rng.gen_range(0..100);
    CLUSTER_THRESHOLDS
        .iter()
        .position(|&threshold| roll < threshold)
        .unwrap_or(CLUSTER_THRESHOLDS.len()) as u32
}

fn store(slots: &mut [Option<Quadrant>], quadrant: Quadrant) {
    if let Some(index) = quadrant_index(quadrant.position) {
        slots[index] = Some(quadrant);
    }
}

fn build_quadrant<R: Rng + ?Sized>(
    position: QuadrantPosition,
    hostiles: u32,
    starbases: u32,
    rng: &mut R,
) -> Quadrant {
    let stars = rng.gen_range(0..MAX_STARS_PER_QUADRANT);
    let map = populate_sector_map(hostiles, stars, starbases, rng);
    Quadrant::new(position, map, hostiles, stars, starbases)
}

/// Generate the 8x8 galaxy, distributing exactly `total_hostiles` and
/// `total_starbases` across its quadrants.
///
/// Hostiles are placed first in randomly sized clusters, each cluster
/// quadrant occasionally receiving a starbase. Leftover starbases then go one
/// per quadrant, and every quadrant still untouched is generated empty.
///
/// The returned quadrants are in row-major order (index `y * 8 + x`).
/// No quadrant ever holds more than five hostiles or one starbase; anything
/// beyond that capacity is dropped with a warning.
pub fn generate_galaxy<R: Rng + ?Sized>(
    total_hostiles: u32,
    total_starbases: u32,
    rng: &mut R,
) -> Vec<Quadrant> {
    let mut slots: Vec<Option<Quadrant>> = (0..GALAXY_SIZE * GALAXY_SIZE).map(|_| None).collect();
    let mut ungenerated: Vec<QuadrantPosition> = (0..GALAXY_SIZE as i32)
        .flat_map(|y| (0..GALAXY_SIZE as i32).map(move |x| QuadrantPosition::new(x, y)))
        .collect();

    let mut remaining_hostiles = total_hostiles;
    let mut remaining_starbases = total_starbases;

    while remaining_hostiles > 0 && !ungenerated.is_empty() {
        let open = ungenerated.len() as u32;
        // Never leave more hostiles than the remaining quadrants can hold.
        let floor = remaining_hostiles.saturating_sub(MAX_HOSTILES_PER_CLUSTER * (open - 1));
        let cluster = cluster_size(rng)
            .max(floor)
            .min(MAX_HOSTILES_PER_CLUSTER)
            .min(remaining_hostiles);
        remaining_hostiles -= cluster;

        let position = ungenerated.swap_remove(rng.gen_range(0..ungenerated.len()));
        let starbase = remaining_starbases > 0
            && (remaining_starbases >= open
                || rng.gen_range(0..100) < STARBASE_WITH_CLUSTER_PERCENT);
        let starbases = u32::from(starbase);
        remaining_starbases -= starbases;

        store(&mut slots, build_quadrant(position, cluster, starbases, rng));
    }

    while remaining_starbases > 0 && !ungenerated.is_empty() {
        let position = ungenerated.swap_remove(rng.gen_range(0..ungenerated.len()));
        remaining_starbases -= 1;
        store(&mut slots, build_quadrant(position, 0, 1, rng));
    }

    for position in ungenerated {
        store(&mut slots, build_quadrant(position, 0, 0, rng));
    }

    if remaining_hostiles > 0 || remaining_starbases > 0 {
        log::warn!(
            "galaxy full: {} hostiles and {} starbases not placed",
            remaining_hostiles,
            remaining_starbases
        );
    }

    slots.into_iter().flatten().collect()
}
