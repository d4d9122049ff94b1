//! Sensed cells.
//!
//! The engine never owns the dungeon. Each turn the sensing collaborator hands
//! over fresh cells that answer a handful of capability queries, described by
//! the [`Cell`] trait. [`Space`] is the concrete value type used by hosts that
//! record, replay or synthesize percepts.

/// Capability queries over one sensed cell.
///
/// A cell with stairs and nothing standing on them reports `is_empty() ==
/// true` *and* `is_stairs() == true`; the stairs are terrain, not an occupant.
pub trait Cell {
    /// Nothing occupies the cell: no wall, no unit.
    fn is_empty(&self) -> bool;

    fn is_wall(&self) -> bool;

    fn is_stairs(&self) -> bool;

    fn is_captive(&self) -> bool;

    /// Unit code of the enemy on this cell (`'a'` for an archer), or `None`
    /// when no enemy is here.
    fn enemy_code(&self) -> Option<char>;

    #[inline]
    fn is_enemy(&self) -> bool {
        self.enemy_code().is_some()
    }
}

impl<C: Cell + ?Sized> Cell for &C {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn is_wall(&self) -> bool {
        (**self).is_wall()
    }

    fn is_stairs(&self) -> bool {
        (**self).is_stairs()
    }

    fn is_captive(&self) -> bool {
        (**self).is_captive()
    }

    fn enemy_code(&self) -> Option<char> {
        (**self).enemy_code()
    }
}

/// What the floor of a cell is made of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Floor,
    Stairs,
    Wall,
}

/// Something standing on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Hostile unit identified by its map character.
    Enemy(char),
    /// Bound unit waiting to be rescued.
    Captive,
}

/// Plain-data cell: terrain plus an optional occupant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space {
    pub terrain: Terrain,
    pub unit: Option<Unit>,
}

impl Space {
    pub const fn new(terrain: Terrain, unit: Option<Unit>) -> Self {
        Self { terrain, unit }
    }

    pub const fn empty() -> Self {
        Self::new(Terrain::Floor, None)
    }

    pub const fn wall() -> Self {
        Self::new(Terrain::Wall, None)
    }

    pub const fn stairs() -> Self {
        Self::new(Terrain::Stairs, None)
    }

    pub const fn enemy(code: char) -> Self {
        Self::new(Terrain::Floor, Some(Unit::Enemy(code)))
    }

    pub const fn captive() -> Self {
        Self::new(Terrain::Floor, Some(Unit::Captive))
    }

    /// Places `unit` on this cell's terrain.
    pub const fn with_unit(self, unit: Unit) -> Self {
        Self::new(self.terrain, Some(unit))
    }
}

impl Cell for Space {
    fn is_empty(&self) -> bool {
        self.terrain != Terrain::Wall && self.unit.is_none()
    }

    fn is_wall(&self) -> bool {
        self.terrain == Terrain::Wall
    }

    fn is_stairs(&self) -> bool {
        self.terrain == Terrain::Stairs
    }

    fn is_captive(&self) -> bool {
        matches!(self.unit, Some(Unit::Captive))
    }

    fn enemy_code(&self) -> Option<char> {
        match self.unit {
            Some(Unit::Enemy(code)) => Some(code),
            _ => None,
        }
    }
}
