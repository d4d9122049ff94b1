//! Errors raised while loading or replaying a script.

use std::path::PathBuf;

use thiserror::Error;
use warrior_core::DecisionError;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read script {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed script")]
    Parse(#[from] ron::error::SpannedError),

    #[error("script {name:?} has no turns")]
    EmptyScript { name: String },

    #[error("turn {turn}: health {health} exceeds the maximum of {max}")]
    HealthOutOfRange { turn: usize, health: u32, max: u32 },

    #[error("turn {turn}: unknown glyph {glyph:?} in {line} line")]
    UnknownGlyph {
        turn: usize,
        line: &'static str,
        glyph: char,
    },

    #[error(transparent)]
    Decision(#[from] DecisionError),
}
