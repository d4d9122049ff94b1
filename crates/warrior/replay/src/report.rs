//! Rendering a replay transcript.

use std::fmt::Write as _;

use crate::runner::TurnRecord;

/// Output format of the transcript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One line per turn.
    #[default]
    Text,
    /// JSON array of turn records.
    Json,
}

pub fn render(name: &str, transcript: &[TurnRecord], format: Format) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(render_text(name, transcript)),
        Format::Json => serde_json::to_string_pretty(transcript),
    }
}

fn render_text(name: &str, transcript: &[TurnRecord]) -> String {
    let count = transcript.len();
    let noun = if count == 1 { "turn" } else { "turns" };
    let mut out = format!("{name}: {count} {noun}\n");
    for record in transcript {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "turn {}: {} [{}] (health {}, facing {})",
            record.turn, record.action, record.rule, record.health, record.facing
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use warrior_core::{Action, Direction, Rule};

    fn transcript() -> Vec<TurnRecord> {
        vec![TurnRecord {
            turn: 1,
            health: 20,
            facing: Direction::Forward,
            rule: Rule::EmptyCell,
            action: Action::Walk(Direction::Forward),
        }]
    }

    #[test]
    fn text_lists_each_turn() {
        let text = render("demo", &transcript(), Format::Text).unwrap();
        assert_eq!(
            text,
            "demo: 1 turn\nturn 1: walk forward [empty-cell] (health 20, facing forward)\n"
        );
    }

    #[test]
    fn header_counts_turns() {
        let one = render("demo", &transcript(), Format::Text).unwrap();
        assert!(one.starts_with("demo: 1 turn\n"));

        let none = render("demo", &[], Format::Text).unwrap();
        assert_eq!(none, "demo: 0 turns\n");

        let mut two = transcript();
        let first = two[0];
        two.push(TurnRecord { turn: 2, ..first });
        let two = render("demo", &two, Format::Text).unwrap();
        assert!(two.starts_with("demo: 2 turns\n"));
    }

    #[test]
    fn json_uses_command_names() {
        let json = render("demo", &transcript(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["action"]["command"], "walk");
        assert_eq!(value[0]["action"]["direction"], "forward");
        assert_eq!(value[0]["rule"], "empty-cell");
    }
}
