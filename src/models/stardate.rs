use std::fmt;

use super::constants::{MESSAGE_LIFETIME_TENTHS, STARDATE_TENTHS_PER_TURN};

/// The simulated clock, stored in tenths of a stardate so that comparisons
/// never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stardate(u64);

impl Stardate {
    pub fn from_tenths(tenths: u64) -> Self {
        Stardate(tenths)
    }

    pub fn tenths(&self) -> u64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    /// Advance one full turn.
    pub fn advance(&mut self) {
        self.0 += STARDATE_TENTHS_PER_TURN;
    }

    /// Stardates elapsed since `earlier`.
    pub fn since(&self, earlier: Stardate) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / 10.0
    }

    /// True once a message logged at `self` should be evicted at `now`.
    pub fn has_expired(&self, now: Stardate) -> bool {
        now.0 >= self.0 + MESSAGE_LIFETIME_TENTHS
    }
}

impl fmt::Display for Stardate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}
