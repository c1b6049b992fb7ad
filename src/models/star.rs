use super::constants::STAR_SHIELDS;
use super::entity::{Damageable, Locatable, Named};
use super::position::SectorPosition;

/// A star. Blocks movement and torpedoes, cannot be destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub sector: SectorPosition,
}

impl Star {
    pub fn new(sector: SectorPosition) -> Self {
        Star { sector }
    }
}

impl Locatable for Star {
    fn location(&self) -> SectorPosition {
        self.sector
    }
}

impl Damageable for Star {
    fn take_damage(&mut self, _amount: i32) {}

    fn shield_strength(&self) -> i32 {
        STAR_SHIELDS
    }
}

impl Named for Star {
    fn name(&self) -> &'static str {
        "Star"
    }
}
