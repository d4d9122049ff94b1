//! Recorded percept scripts.
//!
//! A script is a RON file listing what the warrior sensed on each turn:
//!
//! ```ron
//! (
//!     name: "captive then stairs",
//!     turns: [
//!         (health: 20, forward: "C.>", backward: "|"),
//!         (health: 20, forward: "..>", backward: "|"),
//!     ],
//! )
//! ```
//!
//! Lines are recorded along the corridor's fixed axis, not relative to the
//! warrior: `forward` is the direction the warrior faced on turn one.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use warrior_core::{PolicyConfig, Space};

use crate::error::{ReplayError, Result};
use crate::glyph;

#[derive(Debug, Deserialize)]
struct ScriptFile {
    name: String,
    turns: Vec<PerceptFile>,
}

#[derive(Debug, Deserialize)]
struct PerceptFile {
    health: u32,
    #[serde(default)]
    forward: String,
    #[serde(default)]
    backward: String,
}

/// Everything sensed on one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Percept {
    pub health: u32,
    pub forward: Vec<Space>,
    pub backward: Vec<Space>,
}

/// A validated script, ready to replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub name: String,
    pub turns: Vec<Percept>,
}

impl Script {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let script = Self::parse(&text)?;
        tracing::info!(
            name = %script.name,
            turns = script.turns.len(),
            path = %path.display(),
            "loaded script"
        );
        Ok(script)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let file: ScriptFile = ron::from_str(text)?;

        if file.turns.is_empty() {
            return Err(ReplayError::EmptyScript { name: file.name });
        }

        let turns = file
            .turns
            .into_iter()
            .enumerate()
            .map(|(index, percept)| Percept::validate(index + 1, percept))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: file.name,
            turns,
        })
    }
}

impl Percept {
    fn validate(turn: usize, file: PerceptFile) -> Result<Self> {
        if file.health > PolicyConfig::MAX_HEALTH {
            return Err(ReplayError::HealthOutOfRange {
                turn,
                health: file.health,
                max: PolicyConfig::MAX_HEALTH,
            });
        }

        let parse = |line: &'static str, text: &str| {
            glyph::line(text).map_err(|glyph| ReplayError::UnknownGlyph { turn, line, glyph })
        };

        Ok(Self {
            health: file.health,
            forward: parse("forward", &file.forward)?,
            backward: parse("backward", &file.backward)?,
        })
    }
}
