//! Per-agent memory carried from one turn to the next.

use crate::action::Action;
use crate::direction::Direction;

/// Everything the warrior remembers between turns.
///
/// This is one turn deep: the facing direction, the action chosen last turn
/// and the health observed when it was chosen. It is read while deciding and
/// replaced by [`TurnState::advance`] once the decision is made.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub facing: Direction,
    /// `None` before the first turn.
    pub previous_action: Option<Action>,
    /// `None` before the first turn.
    pub previous_health: Option<u32>,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Health dropped since the previous decision.
    ///
    /// Never true on the first turn, whatever the current health.
    #[inline]
    pub fn is_dying(&self, health: u32) -> bool {
        self.previous_health.is_some_and(|previous| health < previous)
    }

    /// Whether the last action chosen was a rest.
    #[inline]
    pub fn was_resting(&self) -> bool {
        self.previous_action == Some(Action::Rest)
    }

    /// State for the next turn after choosing `action` at `health`.
    ///
    /// A pivot flips the facing direction here so the engine's notion of
    /// "ahead" stays in lockstep with the world's.
    #[must_use]
    pub fn advance(self, action: Action, health: u32) -> Self {
        let facing = match action {
            Action::Pivot => self.facing.opposite(),
            _ => self.facing,
        };

        Self {
            facing,
            previous_action: Some(action),
            previous_health: Some(health),
        }
    }
}
