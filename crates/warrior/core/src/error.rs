//! Errors surfaced by the decision engine.
//!
//! Perception never fails and every branch of the rule table has a fallback,
//! so the only error is the engine failing to produce an action at all. That
//! is a bug in the rule table, reported rather than papered over with a
//! default action.

use thiserror::Error;

use crate::direction::Direction;

pub type Result<T> = std::result::Result<T, DecisionError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("no rule produced an action (facing {facing}, health {health})")]
    NoRuleMatched { facing: Direction, health: u32 },
}
