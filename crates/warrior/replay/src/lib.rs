//! Replay harness for the warrior decision engine.
//!
//! Plays the part of the host game loop without a dungeon: a [`Script`] of
//! recorded percepts stands in for the world, [`ScriptedWorld`] serves them
//! to a [`warrior_core::Warrior`] one turn at a time, and [`run`] collects the
//! resulting decisions into a transcript.

pub mod config;
pub mod error;
pub mod glyph;
pub mod logging;
pub mod report;
pub mod runner;
pub mod script;
pub mod world;

pub use config::ReplayConfig;
pub use error::{ReplayError, Result};
pub use report::Format;
pub use runner::{TurnRecord, run};
pub use script::{Percept, Script};
pub use world::ScriptedWorld;
