//! Turn-by-turn decision engine for a dungeon-crawling warrior.
//!
//! Each turn the host hands the engine a view of the warrior's surroundings
//! and gets back exactly one [`Action`]. The engine itself has two parts:
//!
//! - **Perception** ([`sight`], [`perception`]): classifies the adjacent cell
//!   and the sight lines ahead and behind into a handful of named facts.
//! - **Policy** ([`policy`]): a prioritized rule table, expressed as a
//!   behavior tree, that turns those facts plus one turn of memory into an
//!   action.
//!
//! [`Warrior`] composes the two and keeps the memory ([`TurnState`]). The
//! world itself (grid, simulation, rendering) stays on the host side of the
//! [`Senses`] and [`Actuator`] traits.
pub mod action;
pub mod agent;
pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod perception;
pub mod policy;
pub mod senses;
pub mod sight;
pub mod state;

pub use action::Action;
pub use agent::Warrior;
pub use cell::{Cell, Space, Terrain, Unit};
pub use config::PolicyConfig;
pub use direction::Direction;
pub use error::{DecisionError, Result};
pub use perception::{Adjacent, Perception, Surroundings};
pub use policy::{Decision, Policy, Rule};
pub use senses::{Actuator, Senses};
pub use state::TurnState;
