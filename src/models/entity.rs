//! Entity capability contract
//!
//! Every object that can occupy a sector implements [`Locatable`],
//! [`Damageable`] and [`Named`] (together: [`SectorObject`]). Ships and
//! torpedoes can additionally be moved ([`Movable`]).
//!
//! The sector map stores [`Entity`] values. The player ship is owned by the
//! galaxy, so its cell only holds the `Player` marker; callers resolve it to
//! the real ship with [`Entity::object`] / [`Entity::object_mut`].

use super::enterprise::Enterprise;
use super::klingon::Klingon;
use super::position::SectorPosition;
use super::star::Star;
use super::starbase::Starbase;

pub trait Locatable {
    fn location(&self) -> SectorPosition;
}

pub trait Damageable {
    /// Apply `amount` points of damage using the type's own damage rule.
    fn take_damage(&mut self, amount: i32);

    /// Defence value, used for display and for the destroyed test.
    fn shield_strength(&self) -> i32;

    fn is_destroyed(&self) -> bool {
        self.shield_strength() <= 0
    }
}

pub trait Named {
    fn name(&self) -> &'static str;
}

pub trait Movable: Locatable {
    /// Overwrite the stored coordinates. Grid bookkeeping is the caller's job.
    fn move_to(&mut self, position: SectorPosition);
}

/// Anything that can sit in a sector and be shot at.
pub trait SectorObject: Locatable + Damageable + Named {}

impl<T: Locatable + Damageable + Named> SectorObject for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Hostile,
    Star,
    Starbase,
}

impl EntityKind {
    /// Three-character map symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            EntityKind::Player => "-E-",
            EntityKind::Hostile => "-K-",
            EntityKind::Star => " * ",
            EntityKind::Starbase => ">B<",
        }
    }
}

/// Contents of an occupied sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity {
    Player,
    Hostile(Klingon),
    Star(Star),
    Starbase(Starbase),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player => EntityKind::Player,
            Entity::Hostile(_) => EntityKind::Hostile,
            Entity::Star(_) => EntityKind::Star,
            Entity::Starbase(_) => EntityKind::Starbase,
        }
    }

    pub fn object<'a>(&'a self, player: &'a Enterprise) -> &'a dyn SectorObject {
        match self {
            Entity::Player => player,
            Entity::Hostile(k) => k,
            Entity::Star(s) => s,
            Entity::Starbase(b) => b,
        }
    }

    pub fn object_mut<'a>(&'a mut self, player: &'a mut Enterprise) -> &'a mut dyn SectorObject {
        match self {
            Entity::Player => player,
            Entity::Hostile(k) => k,
            Entity::Star(s) => s,
            Entity::Starbase(b) => b,
        }
    }

    /// Ships are movable; stars and starbases are fixed.
    pub fn movable_mut<'a>(&'a mut self, player: &'a mut Enterprise) -> Option<&'a mut dyn Movable> {
        match self {
            Entity::Player => Some(player),
            Entity::Hostile(k) => Some(k),
            Entity::Star(_) | Entity::Starbase(_) => None,
        }
    }
}
