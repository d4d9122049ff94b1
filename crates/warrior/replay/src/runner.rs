//! Drives a [`Warrior`] through a script, one decision per recorded turn.

use serde::Serialize;
use warrior_core::{Action, Direction, Rule, Warrior};

use crate::error::Result;
use crate::script::Script;
use crate::world::ScriptedWorld;

/// One line of the replay transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub health: u32,
    /// Facing when the decision was made.
    pub facing: Direction,
    pub rule: Rule,
    pub action: Action,
}

/// Replays `script`, stopping after `max_turns` decisions if given.
pub fn run(script: Script, max_turns: Option<usize>) -> Result<Vec<TurnRecord>> {
    let name = script.name.clone();
    let mut world = ScriptedWorld::new(script);
    let mut warrior = Warrior::new();
    let mut transcript = Vec::new();

    while !world.is_finished() {
        if max_turns.is_some_and(|max| transcript.len() >= max) {
            tracing::info!(script = %name, turns = transcript.len(), "turn limit reached");
            break;
        }

        let turn = world.turn();
        let facing = warrior.facing();
        let health = warrior_core::Senses::health(&world);
        let decision = warrior.play_turn(&mut world)?;

        tracing::info!(
            turn,
            health,
            rule = %decision.rule,
            action = %decision.action,
            "turn played"
        );

        transcript.push(TurnRecord {
            turn,
            health,
            facing,
            rule: decision.rule,
            action: decision.action,
        });
    }

    Ok(transcript)
}
