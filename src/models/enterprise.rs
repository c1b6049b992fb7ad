use super::constants::{
    DOCKING_RESUPPLY_FRACTION, ENERGY_TO_MOVE, INITIAL_SHIELDS, PLAYER_MAX_ENERGY,
    PLAYER_MAX_TORPEDOES,
};
use super::entity::{Damageable, Locatable, Movable, Named};
use super::position::SectorPosition;

/// The player's starship.
///
/// Energy is both life and fuel: every action draws on it and the ship is
/// lost when it reaches zero. Shields absorb damage first.
#[derive(Debug, Clone, PartialEq)]
pub struct Enterprise {
    sector: SectorPosition,
    energy: i32,
    shields: i32,
    torpedoes: i32,
}

impl Enterprise {
    pub fn new(sector: SectorPosition) -> Self {
        Enterprise {
            sector,
            energy: PLAYER_MAX_ENERGY,
            shields: INITIAL_SHIELDS,
            torpedoes: PLAYER_MAX_TORPEDOES,
        }
    }

    // ========== Accessor Methods ==========

    pub fn sector(&self) -> SectorPosition {
        self.sector
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn shields(&self) -> i32 {
        self.shields
    }

    pub fn torpedoes(&self) -> i32 {
        self.torpedoes
    }

    pub fn set_energy(&mut self, energy: i32) {
        self.energy = energy.max(0);
    }

    pub fn set_shields(&mut self, shields: i32) {
        self.shields = shields.max(0);
    }

    pub fn set_torpedoes(&mut self, torpedoes: i32) {
        self.torpedoes = torpedoes.max(0);
    }

    // ========== End Accessor Methods ==========

    pub fn shields_raised(&self) -> bool {
        self.shields > 0
    }

    pub fn is_dead(&self) -> bool {
        self.energy <= 0
    }

    /// Energy cost of moving one sector with the current shield setting.
    pub fn move_cost(&self) -> i32 {
        ENERGY_TO_MOVE + (self.shields / 1000) * ENERGY_TO_MOVE
    }

    pub fn spend_energy(&mut self, amount: i32) {
        self.energy = (self.energy - amount).max(0);
    }

    /// Take one torpedo from the magazine. Returns false when none are left.
    pub fn consume_torpedo(&mut self) -> bool {
        if self.torpedoes > 0 {
            self.torpedoes -= 1;
            true
        } else {
            false
        }
    }

    /// Reallocate the combined energy+shields pool so that shields hold
    /// `requested`. Requests beyond the pool put everything into shields.
    pub fn allocate_shields(&mut self, requested: i32) {
        let pool = self.energy + self.shields;
        let requested = requested.max(0);
        if requested > pool {
            self.shields = pool;
            self.energy = 0;
        } else {
            self.shields = requested;
            self.energy = pool - requested;
        }
    }

    /// One turn of starbase resupply: a quarter of the maximum energy and
    /// torpedo load, clamped to the maxima.
    pub fn resupply(&mut self) {
        let energy = (PLAYER_MAX_ENERGY as f64 * DOCKING_RESUPPLY_FRACTION) as i32;
        let torpedoes = (PLAYER_MAX_TORPEDOES as f64 * DOCKING_RESUPPLY_FRACTION) as i32;
        self.energy = (self.energy + energy).min(PLAYER_MAX_ENERGY);
        self.torpedoes = (self.torpedoes + torpedoes).min(PLAYER_MAX_TORPEDOES);
    }
}

impl Locatable for Enterprise {
    fn location(&self) -> SectorPosition {
        self.sector
    }
}

impl Movable for Enterprise {
    fn move_to(&mut self, position: SectorPosition) {
        self.sector = position;
    }
}

impl Damageable for Enterprise {
    /// Shields absorb damage first; whatever gets through drains energy at
    /// double rate.
    fn take_damage(&mut self, amount: i32) {
        if amount <= self.shields {
            self.shields -= amount;
        } else {
            let overflow = amount - self.shields;
            self.shields = 0;
            self.energy = self.energy.saturating_sub(overflow.saturating_mul(2)).max(0);
        }
    }

    /// Shields while they are up, otherwise the remaining energy.
    fn shield_strength(&self) -> i32 {
        if self.shields > 0 {
            self.shields
        } else {
            self.energy
        }
    }
}

impl Named for Enterprise {
    fn name(&self) -> &'static str {
        "Enterprise"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: create an Enterprise with the given pools.
    fn enterprise_with(energy: i32, shields: i32) -> Enterprise {
        let mut e = Enterprise::new(SectorPosition::new(4, 4));
        e.set_energy(energy);
        e.set_shields(shields);
        e
    }

    #[test]
    fn starts_with_full_resources() {
        let e = Enterprise::new(SectorPosition::new(1, 1));
        assert_eq!(e.energy(), PLAYER_MAX_ENERGY);
        assert_eq!(e.torpedoes(), PLAYER_MAX_TORPEDOES);
        assert_eq!(e.shields(), 0);
    }

    #[test]
    fn damage_within_shields_leaves_energy() {
        let mut e = enterprise_with(3000, 800);
        e.take_damage(500);
        assert_eq!(e.shields(), 300);
        assert_eq!(e.energy(), 3000);
    }

    #[test]
    fn overflow_damage_costs_double_energy() {
        let mut e = enterprise_with(3000, 200);
        e.take_damage(500);
        assert_eq!(e.shields(), 0);
        assert_eq!(e.energy(), 3000 - 2 * 300);
    }

    #[test]
    fn energy_never_goes_negative() {
        let mut e = enterprise_with(100, 0);
        e.take_damage(500);
        assert_eq!(e.energy(), 0);
        assert!(e.is_dead());
        assert!(e.is_destroyed());
    }

    #[test]
    fn shield_strength_falls_back_to_energy() {
        let e = enterprise_with(1200, 0);
        assert_eq!(e.shield_strength(), 1200);
        let e = enterprise_with(1200, 50);
        assert_eq!(e.shield_strength(), 50);
    }

    #[test]
    fn allocate_shields_clamps_to_pool() {
        let mut e = enterprise_with(3000, 0);
        e.allocate_shields(5000);
        assert_eq!(e.shields(), 3000);
        assert_eq!(e.energy(), 0);
    }

    #[test]
    fn allocate_shields_conserves_pool() {
        let mut e = enterprise_with(3000, 1000);
        e.allocate_shields(250);
        assert_eq!(e.shields(), 250);
        assert_eq!(e.energy(), 3750);
    }

    #[test]
    fn resupply_adds_a_quarter_and_clamps() {
        let mut e = enterprise_with(1000, 0);
        e.set_torpedoes(3);
        e.resupply();
        assert_eq!(e.energy(), 2250);
        assert_eq!(e.torpedoes(), 8);

        let mut e = enterprise_with(4900, 0);
        e.set_torpedoes(19);
        e.resupply();
        assert_eq!(e.energy(), PLAYER_MAX_ENERGY);
        assert_eq!(e.torpedoes(), PLAYER_MAX_TORPEDOES);
    }

    #[test]
    fn move_cost_grows_with_shields() {
        assert_eq!(enterprise_with(3000, 0).move_cost(), 10);
        assert_eq!(enterprise_with(3000, 999).move_cost(), 10);
        assert_eq!(enterprise_with(3000, 2500).move_cost(), 30);
    }

    #[test]
    fn consume_torpedo_stops_at_zero() {
        let mut e = enterprise_with(3000, 0);
        e.set_torpedoes(1);
        assert!(e.consume_torpedo());
        assert!(!e.consume_torpedo());
        assert_eq!(e.torpedoes(), 0);
    }
}
