//! Behavior tree nodes for the warrior's policy.
//!
//! - `conditions`: read the blackboard and succeed or fail
//! - `actions`: write the chosen [`Action`](crate::Action) into the blackboard

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
