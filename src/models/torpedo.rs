use super::direction::Direction;
use super::entity::{Locatable, Movable, Named};
use super::position::SectorPosition;

/// Who launched a torpedo. Shows up in the hit report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorpedoOrigin {
    Player,
    Hostile,
}

/// A photon torpedo in flight. Travels one sector per physics step along a
/// fixed course and detonates on the first object it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torpedo {
    pub sector: SectorPosition,
    pub direction: Direction,
    pub origin: TorpedoOrigin,
}

impl Torpedo {
    pub fn new(sector: SectorPosition, direction: Direction, origin: TorpedoOrigin) -> Self {
        Torpedo {
            sector,
            direction,
            origin,
        }
    }

    /// The sector this torpedo will try to enter next.
    pub fn next_sector(&self) -> SectorPosition {
        self.sector.step(self.direction)
    }
}

impl Locatable for Torpedo {
    fn location(&self) -> SectorPosition {
        self.sector
    }
}

impl Movable for Torpedo {
    fn move_to(&mut self, position: SectorPosition) {
        self.sector = position;
    }
}

impl Named for Torpedo {
    fn name(&self) -> &'static str {
        match self.origin {
            TorpedoOrigin::Player => "torpedo",
            TorpedoOrigin::Hostile => "Klingon torpedo",
        }
    }
}
