use super::constants::STARBASE_INITIAL_SHIELDS;
use super::entity::{Damageable, Locatable, Named};
use super::position::SectorPosition;

/// A Federation starbase. The player resupplies by docking next to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Starbase {
    pub sector: SectorPosition,
    pub shields: i32,
}

impl Starbase {
    pub fn new(sector: SectorPosition) -> Self {
        Starbase {
            sector,
            shields: STARBASE_INITIAL_SHIELDS,
        }
    }
}

impl Locatable for Starbase {
    fn location(&self) -> SectorPosition {
        self.sector
    }
}

impl Damageable for Starbase {
    fn take_damage(&mut self, amount: i32) {
        self.shields -= amount;
    }

    fn shield_strength(&self) -> i32 {
        self.shields
    }
}

impl Named for Starbase {
    fn name(&self) -> &'static str {
        "Starbase"
    }
}
