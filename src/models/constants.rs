pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 10;

pub const PLAYER_MAX_ENERGY: i32 = 5000;
pub const PLAYER_MAX_TORPEDOES: i32 = 20;
pub const INITIAL_SHIELDS: i32 = 0;
pub const KLINGON_INITIAL_SHIELDS: i32 = 1000;
pub const STARBASE_INITIAL_SHIELDS: i32 = 10_000;
/// Stars cannot be damaged, so they report the largest possible shield value.
pub const STAR_SHIELDS: i32 = i32::MAX;

pub const TORPEDO_DAMAGE: i32 = 500;
pub const ENERGY_TO_MOVE: i32 = 10;
/// Energy cost per quadrant of straight-line distance travelled.
pub const NAVIGATION_COST_PER_QUADRANT: f64 = 100.0;

/// Docking restores this fraction of the maximum energy and torpedo load per turn.
pub const DOCKING_RESUPPLY_FRACTION: f64 = 0.25;

/// Stardate is tracked in tenths. 37001 == 3700.1.
pub const STARTING_STARDATE_TENTHS: u64 = 37_001;
pub const STARDATE_TENTHS_PER_TURN: u64 = 1;
/// Messages are evicted half a stardate after they are logged.
pub const MESSAGE_LIFETIME_TENTHS: u64 = 5;

pub const DEFAULT_HOSTILES: u32 = 25;
pub const DEFAULT_STARBASES: u32 = 5;
pub const MAX_STARS_PER_QUADRANT: u32 = 7;
pub const MAX_HOSTILES_PER_CLUSTER: u32 = 5;
pub const MAX_TOTAL_HOSTILES: u32 = (GALAXY_SIZE * GALAXY_SIZE) as u32 * MAX_HOSTILES_PER_CLUSTER;
pub const MAX_TOTAL_STARBASES: u32 = (GALAXY_SIZE * GALAXY_SIZE) as u32;

/// Cumulative percentile thresholds for the hostile cluster size of a quadrant.
/// A roll in `0..100` below `CLUSTER_THRESHOLDS[n]` yields a cluster of `n`.
pub const CLUSTER_THRESHOLDS: [u32; 5] = [55, 75, 85, 92, 97];

/// Percent chance that a hostile cluster quadrant also receives a starbase.
pub const STARBASE_WITH_CLUSTER_PERCENT: u32 = 10;

/// Hostile AI: percent chance to act at all in a turn, then to fire rather than move.
pub const HOSTILE_ACTION_PERCENT: u32 = 66;
pub const HOSTILE_FIRE_PERCENT: u32 = 25;

/// Longest numeric entry accepted by the input panel.
pub const MAX_INPUT_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Green,
    Red,
    Docked,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Green => "GREEN",
            Condition::Red => "RED",
            Condition::Docked => "DOCKED",
        }
    }
}
