//! Blackboard shared by every node of the policy tree.

use crate::action::Action;
use crate::direction::Direction;
use crate::perception::Perception;
use crate::state::TurnState;

use super::rule::{Decision, Rule};

/// Context for one evaluation of the policy tree.
///
/// Holds copies of this turn's facts and the slot the chosen action is written
/// to. Nothing in here outlives the turn.
#[derive(Clone, Debug)]
pub struct PolicyContext {
    pub perception: Perception,
    pub facing: Direction,
    pub health: u32,
    /// Health dropped since the previous decision.
    pub dying: bool,
    /// The previous action was a rest.
    pub was_resting: bool,

    action: Option<Action>,
    rule: Option<Rule>,
}

impl PolicyContext {
    pub fn new(perception: Perception, state: &TurnState, health: u32) -> Self {
        Self {
            perception,
            facing: state.facing,
            health,
            dying: state.is_dying(health),
            was_resting: state.was_resting(),
            action: None,
            rule: None,
        }
    }

    /// Records the action chosen by an action node.
    ///
    /// Only one action node may succeed per evaluation; a second write means
    /// two rules fired in the same turn.
    pub fn set_action(&mut self, action: Action) {
        debug_assert!(
            self.action.is_none(),
            "action already chosen this turn: {:?}, then {:?}",
            self.action,
            action
        );
        self.action = Some(action);
    }

    /// Attributes the chosen action to the rule whose branch produced it.
    /// The first attribution sticks.
    pub fn attribute(&mut self, rule: Rule) {
        self.rule.get_or_insert(rule);
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Extracts the decision, if an action was chosen and attributed.
    pub fn take_decision(self) -> Option<Decision> {
        Some(Decision {
            rule: self.rule?,
            action: self.action?,
        })
    }
}
