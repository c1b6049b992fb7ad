//! Compass directions keyed to the numeric keypad

use std::fmt;

/// One of the nine keypad directions.
///
/// The layout mirrors a numeric keypad with north at the top:
///
/// ```text
/// 7 8 9      NW  N  NE
/// 4 5 6  =>   W  .   E
/// 1 2 3      SW  S  SE
/// ```
///
/// `Hold` (5) means no movement. The same mapping is used for ship movement,
/// torpedo courses and hostile AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    SouthWest = 1,
    South = 2,
    SouthEast = 3,
    West = 4,
    Hold = 5,
    East = 6,
    NorthWest = 7,
    North = 8,
    NorthEast = 9,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::West,
        Direction::Hold,
        Direction::East,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// Create a direction from its keypad digit
    ///
    /// # Returns
    /// Ok(Direction) for 1-9, Err with message otherwise
    pub fn from_digit(digit: i32) -> Result<Self, &'static str> {
        match digit {
            1 => Ok(Direction::SouthWest),
            2 => Ok(Direction::South),
            3 => Ok(Direction::SouthEast),
            4 => Ok(Direction::West),
            5 => Ok(Direction::Hold),
            6 => Ok(Direction::East),
            7 => Ok(Direction::NorthWest),
            8 => Ok(Direction::North),
            9 => Ok(Direction::NorthEast),
            _ => Err("Direction must be between 1 and 9"),
        }
    }

    pub fn digit(&self) -> i32 {
        *self as i32
    }

    /// Per-step (dx, dy) offset.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::SouthWest => (-1, -1),
            Direction::South => (0, -1),
            Direction::SouthEast => (1, -1),
            Direction::West => (-1, 0),
            Direction::Hold => (0, 0),
            Direction::East => (1, 0),
            Direction::NorthWest => (-1, 1),
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
        }
    }

    /// The direction whose delta has the same signs as `(dx, dy)`.
    ///
    /// Only the signs are considered, so a target that is not on an exact
    /// diagonal still maps to the nearest diagonal.
    pub fn toward(dx: i32, dy: i32) -> Direction {
        match (dx.signum(), dy.signum()) {
            (-1, -1) => Direction::SouthWest,
            (0, -1) => Direction::South,
            (1, -1) => Direction::SouthEast,
            (-1, 0) => Direction::West,
            (1, 0) => Direction::East,
            (-1, 1) => Direction::NorthWest,
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            _ => Direction::Hold,
        }
    }

    pub fn is_hold(&self) -> bool {
        *self == Direction::Hold
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}
