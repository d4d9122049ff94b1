//! The warrior's action vocabulary.

use core::fmt;

use strum::IntoStaticStr;

use crate::direction::Direction;

/// One turn's worth of intent, handed to the world for execution.
///
/// Bare commands carry no payload; the rest are aimed along a [`Direction`].
/// Hosts pattern-match on the variant to perform the matching world mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "command", content = "direction"))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    /// Recover health in place.
    Rest,
    /// Turn around to face the opposite direction.
    Pivot,
    Walk(Direction),
    /// Ranged attack along the direction.
    Shoot(Direction),
    /// Melee attack on the adjacent cell.
    Attack(Direction),
    /// Free the captive on the adjacent cell.
    Rescue(Direction),
}

impl Action {
    /// Command name as the world knows it (`"walk"`, `"pivot"`, ...).
    pub fn command(&self) -> &'static str {
        self.into()
    }

    /// Direction the action is aimed along, for directional commands.
    pub const fn direction(&self) -> Option<Direction> {
        match *self {
            Action::Rest | Action::Pivot => None,
            Action::Walk(d) | Action::Shoot(d) | Action::Attack(d) | Action::Rescue(d) => Some(d),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(direction) => write!(f, "{} {}", self.command(), direction),
            None => f.write_str(self.command()),
        }
    }
}
