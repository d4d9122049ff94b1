//! Interfaces to the world the warrior acts in.
//!
//! The engine consumes these; hosts implement them. Hosts running a real
//! dungeon answer from their simulation, test fixtures answer from canned
//! cells, and the replay harness answers from a recorded script.

use crate::action::Action;
use crate::cell::Cell;
use crate::direction::Direction;

/// Read-only view of the warrior's surroundings for the current turn.
pub trait Senses {
    type Cell: Cell;

    /// The single cell adjacent in `direction`.
    fn feel(&self, direction: Direction) -> Self::Cell;

    /// Everything visible along `direction`, nearest first, up to and
    /// including whatever blocks the view.
    fn look(&self, direction: Direction) -> Vec<Self::Cell>;

    fn health(&self) -> u32;
}

/// Carries out the chosen action.
///
/// Whatever the action does to the world (movement, damage, rescues) is the
/// implementor's business; the engine only hands it over.
pub trait Actuator {
    fn act(&mut self, action: Action);
}
