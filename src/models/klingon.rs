use super::constants::KLINGON_INITIAL_SHIELDS;
use super::entity::{Damageable, Locatable, Movable, Named};
use super::position::SectorPosition;

/// A Klingon warship within a quadrant's sector grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Klingon {
    pub sector: SectorPosition,
    pub shields: i32,
}

impl Klingon {
    pub fn new(sector: SectorPosition) -> Self {
        Klingon {
            sector,
            shields: KLINGON_INITIAL_SHIELDS,
        }
    }
}

impl Locatable for Klingon {
    fn location(&self) -> SectorPosition {
        self.sector
    }
}

impl Movable for Klingon {
    fn move_to(&mut self, position: SectorPosition) {
        self.sector = position;
    }
}

impl Damageable for Klingon {
    fn take_damage(&mut self, amount: i32) {
        self.shields -= amount;
    }

    fn shield_strength(&self) -> i32 {
        self.shields
    }
}

impl Named for Klingon {
    fn name(&self) -> &'static str {
        "Klingon"
    }
}
