//! Galaxy model
//!
//! The 8x8 grid of quadrants, the player ship, the stardate clock and the
//! galaxy-wide hostile and starbase counters. Exactly one quadrant is
//! active at a time; it is the one being simulated and displayed.

mod generation;
mod quadrant_ops;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::constants::{
    GALAXY_SIZE, MAX_TOTAL_HOSTILES, MAX_TOTAL_STARBASES, STARTING_STARDATE_TENTHS,
};
use super::enterprise::Enterprise;
use super::errors::{GameError, GameResult};
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::{Quadrant, QuadrantSummary};
use super::stardate::Stardate;

pub use generation::{generate_galaxy, populate_sector_map};
pub use quadrant_ops::quadrant_index;
use quadrant_ops::{enter_quadrant, neighborhood, scan_neighbors};

/// What the main screen is showing. Time only passes in `Quadrant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Quadrant,
    GalaxyMap,
    LongRangeSensors,
    Quitting,
}

/// Galaxy-wide hostile and starbase counts.
///
/// The remaining counts always equal the sums over all quadrants; they are
/// only ever decremented together with a quadrant's own count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub starting_hostiles: u32,
    pub hostiles: u32,
    pub starting_starbases: u32,
    pub starbases: u32,
}

impl Tally {
    pub fn new(hostiles: u32, starbases: u32) -> Self {
        Tally {
            starting_hostiles: hostiles,
            hostiles,
            starting_starbases: starbases,
            starbases,
        }
    }

    pub fn hostile_destroyed(&mut self) {
        self.hostiles = self.hostiles.saturating_sub(1);
    }

    pub fn starbase_destroyed(&mut self) {
        self.starbases = self.starbases.saturating_sub(1);
    }

    pub fn hostiles_destroyed(&self) -> u32 {
        self.starting_hostiles.saturating_sub(self.hostiles)
    }
}

/// Mutable view of the active quadrant together with the galaxy state that
/// quadrant-level operations need: the player, the counters, the clock and
/// the random source.
pub struct ActiveQuadrant<'a> {
    pub quadrant: &'a mut Quadrant,
    pub player: &'a mut Enterprise,
    pub tally: &'a mut Tally,
    pub stardate: Stardate,
    pub rng: &'a mut StdRng,
}

impl ActiveQuadrant<'_> {
    /// Append a message stamped with the current stardate.
    pub fn log(&mut self, text: impl Into<String>) {
        self.quadrant.log(text, self.stardate);
    }
}

/// Top-level game state container.
pub struct Galaxy {
    /// Row-major: quadrants[y * 8 + x].
    quadrants: Vec<Quadrant>,
    player: Enterprise,
    stardate: Stardate,
    starting_stardate: Stardate,
    tally: Tally,
    active: QuadrantPosition,
    view: View,
    rng: StdRng,
}

/// Check requested totals against what 64 quadrants can hold.
pub fn check_capacity(hostiles: u32, starbases: u32) -> GameResult<()> {
    if hostiles > MAX_TOTAL_HOSTILES {
        return Err(GameError::InvalidConfig(format!(
            "hostiles must be at most {}, got {}",
            MAX_TOTAL_HOSTILES, hostiles
        )));
    }
    if starbases > MAX_TOTAL_STARBASES {
        return Err(GameError::InvalidConfig(format!(
            "starbases must be at most {}, got {}",
            MAX_TOTAL_STARBASES, starbases
        )));
    }
    Ok(())
}

impl Galaxy {
    /// Generate a galaxy from a seed and place the player in a random
    /// quadrant.
    ///
    /// Fails with [`GameError::InvalidConfig`] when the totals exceed the
    /// galaxy's capacity.
    pub fn new(seed: u64, hostiles: u32, starbases: u32) -> GameResult<Self> {
        check_capacity(hostiles, starbases)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let quadrants = generate_galaxy(hostiles, starbases, &mut rng);

        let tally = Tally::new(
            quadrants.iter().map(|q| q.hostiles).sum(),
            quadrants.iter().map(|q| q.starbases).sum(),
        );

        let start = QuadrantPosition::new(
            rng.gen_range(0..GALAXY_SIZE as i32),
            rng.gen_range(0..GALAXY_SIZE as i32),
        );

        let stardate = Stardate::from_tenths(STARTING_STARDATE_TENTHS);
        let mut galaxy = Galaxy {
            quadrants,
            player: Enterprise::new(SectorPosition::new(0, 0)),
            stardate,
            starting_stardate: stardate,
            tally,
            active: start,
            view: View::Quadrant,
            rng,
        };
        galaxy.set_active_quadrant(start)?;

        log::info!(
            "galaxy generated: seed {}, {} hostiles, {} starbases, starting in quadrant {},{}",
            seed,
            tally.hostiles,
            tally.starbases,
            start.x + 1,
            start.y + 1
        );

        Ok(galaxy)
    }

    // ========== Accessor Methods ==========

    pub fn stardate(&self) -> Stardate {
        self.stardate
    }

    pub fn starting_stardate(&self) -> Stardate {
        self.starting_stardate
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn remaining_hostiles(&self) -> u32 {
        self.tally.hostiles
    }

    pub fn starting_hostiles(&self) -> u32 {
        self.tally.starting_hostiles
    }

    pub fn remaining_starbases(&self) -> u32 {
        self.tally.starbases
    }

    pub fn player(&self) -> &Enterprise {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Enterprise {
        &mut self.player
    }

    pub fn active_position(&self) -> QuadrantPosition {
        self.active
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn quadrant(&self, pos: QuadrantPosition) -> Option<&Quadrant> {
        quadrant_index(pos).and_then(|i| self.quadrants.get(i))
    }

    pub fn quadrants(&self) -> &[Quadrant] {
        &self.quadrants
    }

    // ========== End Accessor Methods ==========

    fn active_index(&self) -> GameResult<usize> {
        quadrant_index(self.active).ok_or(GameError::QuadrantOutOfRange {
            x: self.active.x,
            y: self.active.y,
        })
    }

    pub fn active_quadrant(&self) -> GameResult<&Quadrant> {
        let index = self.active_index()?;
        Ok(&self.quadrants[index])
    }

    pub fn active_quadrant_mut(&mut self) -> GameResult<&mut Quadrant> {
        let index = self.active_index()?;
        Ok(&mut self.quadrants[index])
    }

    /// Borrow the active quadrant along with the state its operations share.
    pub fn active(&mut self) -> GameResult<ActiveQuadrant<'_>> {
        let index = self.active_index()?;
        Ok(ActiveQuadrant {
            quadrant: &mut self.quadrants[index],
            player: &mut self.player,
            tally: &mut self.tally,
            stardate: self.stardate,
            rng: &mut self.rng,
        })
    }

    /// Advance the clock one turn and drop expired messages.
    pub fn advance_stardate(&mut self) -> GameResult<()> {
        self.stardate.advance();
        let now = self.stardate;
        self.active_quadrant_mut()?.messages.expire(now);
        Ok(())
    }

    /// Move the player into quadrant `pos`: vacate the current quadrant and
    /// place the ship at a random empty sector of the new one.
    pub fn set_active_quadrant(&mut self, pos: QuadrantPosition) -> GameResult<()> {
        let target = quadrant_index(pos).ok_or(GameError::QuadrantOutOfRange {
            x: pos.x,
            y: pos.y,
        })?;
        if let Ok(current) = self.active_index() {
            self.quadrants[current].vacate();
        }
        self.active = pos;
        enter_quadrant(
            &mut self.quadrants[target],
            &mut self.player,
            self.stardate,
            &mut self.rng,
        );
        log::info!(
            "entered quadrant {},{} at sector {},{}",
            pos.x + 1,
            pos.y + 1,
            self.player.sector().x + 1,
            self.player.sector().y + 1
        );
        Ok(())
    }

    /// Reveal the active quadrant and its eight neighbours.
    pub fn scan_neighbors(&mut self) {
        scan_neighbors(&mut self.quadrants, self.active);
    }

    /// Long-range sensor block around the active quadrant, north row first.
    pub fn neighborhood(&self) -> [[Option<QuadrantSummary>; 3]; 3] {
        neighborhood(&self.quadrants, self.active)
    }

    pub fn quadrant_summary(&self, pos: QuadrantPosition) -> Option<QuadrantSummary> {
        self.quadrant(pos).map(|q| q.summary(pos == self.active))
    }

    pub fn all_hostiles_destroyed(&self) -> bool {
        self.tally.hostiles == 0
    }

    pub fn player_destroyed(&self) -> bool {
        self.player.is_dead()
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("stardate", &self.stardate)
            .field("active", &self.active)
            .field("view", &self.view)
            .field("tally", &self.tally)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{PLAYER_MAX_ENERGY, PLAYER_MAX_TORPEDOES};
    use crate::models::entity::{Entity, EntityKind};

    fn galaxy(seed: u64) -> Galaxy {
        Galaxy::new(seed, 25, 5).unwrap()
    }

    #[test]
    fn counters_match_quadrant_sums() {
        let g = galaxy(42);
        assert_eq!(g.remaining_hostiles(), 25);
        assert_eq!(g.remaining_starbases(), 5);
        let hostiles: u32 = g.quadrants().iter().map(|q| q.hostiles).sum();
        let starbases: u32 = g.quadrants().iter().map(|q| q.starbases).sum();
        assert_eq!(hostiles, g.remaining_hostiles());
        assert_eq!(starbases, g.remaining_starbases());
    }

    #[test]
    fn player_starts_in_active_quadrant() {
        let g = galaxy(7);
        let q = g.active_quadrant().unwrap();
        assert!(q.scanned);
        assert_eq!(q.map.find_player(), Some(g.player().sector()));
        assert_eq!(g.player().energy(), PLAYER_MAX_ENERGY);
        assert_eq!(g.player().torpedoes(), PLAYER_MAX_TORPEDOES);
    }

    #[test]
    fn starts_at_stardate_3700_1() {
        let g = galaxy(1);
        assert_eq!(g.stardate().to_string(), "3700.1");
        assert_eq!(g.view(), View::Quadrant);
    }

    #[test]
    fn deterministic_with_same_seed() {
        let g1 = galaxy(123);
        let g2 = galaxy(123);
        assert_eq!(g1.active_position(), g2.active_position());
        assert_eq!(g1.player().sector(), g2.player().sector());
        for (a, b) in g1.quadrants().iter().zip(g2.quadrants()) {
            assert_eq!(a.hostiles, b.hostiles);
            assert_eq!(a.stars, b.stars);
            assert_eq!(a.starbases, b.starbases);
        }
    }

    #[test]
    fn changing_quadrant_moves_player_marker() {
        let mut g = galaxy(9);
        let from = g.active_position();
        let to = QuadrantPosition::new((from.x + 1) % 8, from.y);
        g.set_active_quadrant(to).unwrap();

        assert_eq!(g.quadrant(from).unwrap().map.find_player(), None);
        let q = g.active_quadrant().unwrap();
        assert_eq!(q.map.find_player(), Some(g.player().sector()));
        assert!(q.scanned);
        assert_eq!(q.map.count(EntityKind::Player), 1);
    }

    #[test]
    fn out_of_range_quadrant_is_fatal() {
        let mut g = galaxy(9);
        let err = g.set_active_quadrant(QuadrantPosition::new(8, 0)).unwrap_err();
        assert!(matches!(err, GameError::QuadrantOutOfRange { x: 8, y: 0 }));
    }

    #[test]
    fn scan_neighbors_reveals_three_by_three() {
        let mut g = galaxy(4);
        g.set_active_quadrant(QuadrantPosition::new(0, 0)).unwrap();
        g.scan_neighbors();
        let scanned = g.quadrants().iter().filter(|q| q.scanned).count();
        assert!(scanned >= 4);
        for pos in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert!(g.quadrant(QuadrantPosition::new(pos.0, pos.1)).unwrap().scanned);
        }
        let block = g.neighborhood();
        assert!(block[0][0].is_none());
        assert!(block[1][1].map(|s| s.is_active).unwrap_or(false));
        assert!(block[2][1].is_none());
    }

    #[test]
    fn advancing_the_clock_expires_messages() {
        let mut g = galaxy(2);
        let now = g.stardate();
        g.active_quadrant_mut().unwrap().log("hello", now);
        for _ in 0..4 {
            g.advance_stardate().unwrap();
        }
        assert!(g.active_quadrant().unwrap().messages.contains("hello"));
        g.advance_stardate().unwrap();
        assert!(!g.active_quadrant().unwrap().messages.contains("hello"));
    }

    #[test]
    fn overfull_galaxy_is_rejected() {
        let err = Galaxy::new(1, 1000, 0).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        let err = Galaxy::new(1, 25, 65).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        let full = Galaxy::new(1, MAX_TOTAL_HOSTILES, MAX_TOTAL_STARBASES).unwrap();
        assert_eq!(full.remaining_hostiles(), MAX_TOTAL_HOSTILES);
    }

    #[test]
    fn tally_saturates() {
        let mut t = Tally::new(1, 0);
        t.hostile_destroyed();
        t.hostile_destroyed();
        t.starbase_destroyed();
        assert_eq!(t.hostiles, 0);
        assert_eq!(t.starbases, 0);
        assert_eq!(t.hostiles_destroyed(), 1);
    }

    #[test]
    fn active_context_reaches_player() {
        let mut g = galaxy(5);
        let sector = g.player().sector();
        let ctx = g.active().unwrap();
        assert_eq!(ctx.quadrant.map.get(sector), Some(&Entity::Player));
        assert_eq!(ctx.player.sector(), sector);
    }
}
