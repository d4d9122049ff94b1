//! Lightweight behavior tree library for turn-at-a-time decision policies.
//!
//! Trees built with this crate are evaluated once per turn against a
//! blackboard context and finish within that single tick:
//!
//! - **No delta time**: a tick never spans more than one turn
//! - **No Running state**: every node succeeds or fails immediately
//! - **Stateless nodes**: nodes hold configuration only, so re-ticking the same
//!   tree against the same context yields the same outcome
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`] (AND), [`Selector`] (first success wins)
//! - Decorator nodes: [`Inverter`]
//! - Leaf nodes: implemented by the policy on its own blackboard type
//! - [`builder`]: boxed shorthands for assembling trees

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use status::Status;
