//! Policy: the prioritized rule evaluator.
//!
//! The rule table is a behavior tree (see [`rules`]). Evaluating it against a
//! fresh [`PolicyContext`] yields exactly one [`Decision`]. The tree itself is
//! stateless, so the same perception and state always produce the same
//! decision.

pub mod context;
pub mod nodes;
pub mod rule;
pub mod rules;

use core::fmt;

use behavior_tree::Behavior;

use crate::error::{DecisionError, Result};
use crate::perception::Perception;
use crate::state::TurnState;

pub use context::PolicyContext;
pub use rule::{Decision, Rule};
pub use rules::BehaviorTree;

/// The warrior's rule table, ready to evaluate.
pub struct Policy {
    tree: BehaviorTree,
}

impl Policy {
    pub fn new() -> Self {
        Self::with_tree(rules::warrior())
    }

    /// Uses a custom rule tree instead of the warrior's.
    pub fn with_tree(tree: BehaviorTree) -> Self {
        Self { tree }
    }

    /// Picks this turn's action.
    ///
    /// Pure: reads `perception`, `state` and `health` and nothing else. The
    /// caller is responsible for advancing `state` afterwards.
    pub fn decide(
        &self,
        perception: Perception,
        state: &TurnState,
        health: u32,
    ) -> Result<Decision> {
        let mut ctx = PolicyContext::new(perception, state, health);
        self.tree.tick(&mut ctx);

        let decision = ctx
            .take_decision()
            .ok_or(DecisionError::NoRuleMatched {
                facing: state.facing,
                health,
            })?;

        tracing::debug!(
            rule = %decision.rule,
            action = %decision.action,
            facing = %state.facing,
            health,
            "decided"
        );

        Ok(decision)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy").finish_non_exhaustive()
    }
}
