use super::constants::{GALAXY_SIZE, SECTOR_SIZE};
use super::direction::Direction;

/// A position within a 10x10 sector grid.
/// Values range 0-9. (0,0) is the lower-left corner.
/// X increases left-to-right (east), Y increases bottom-to-top (north).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorPosition {
    pub x: i32,
    pub y: i32,
}

impl SectorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        SectorPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..SECTOR_SIZE as i32).contains(&self.x) && (0..SECTOR_SIZE as i32).contains(&self.y)
    }

    /// The neighbouring cell in `direction`. May be out of bounds.
    pub fn step(&self, direction: Direction) -> SectorPosition {
        let (dx, dy) = direction.delta();
        SectorPosition {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when `other` shares an edge with this cell (diagonals excluded).
    pub fn is_orthogonally_adjacent(&self, other: SectorPosition) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 0-7; the UI presents them 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadrantPosition {
    pub x: i32,
    pub y: i32,
}

impl QuadrantPosition {
    pub fn new(x: i32, y: i32) -> Self {
        QuadrantPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GALAXY_SIZE as i32).contains(&self.x) && (0..GALAXY_SIZE as i32).contains(&self.y)
    }

    /// Straight-line distance in quadrants.
    pub fn distance_to(&self, other: QuadrantPosition) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
