//! A world that answers from a script instead of a simulation.

use warrior_core::{Action, Actuator, Direction, Senses, Space};

use crate::script::{Percept, Script};

/// Host collaborator backed by recorded percepts.
///
/// Senses answer from the current turn's percept. Each dispatched action is
/// recorded and moves the script on to the next turn.
#[derive(Debug)]
pub struct ScriptedWorld {
    turns: Vec<Percept>,
    cursor: usize,
    dispatched: Vec<Action>,
}

impl ScriptedWorld {
    pub fn new(script: Script) -> Self {
        Self {
            turns: script.turns,
            cursor: 0,
            dispatched: Vec::new(),
        }
    }

    /// One-based number of the turn currently being sensed.
    pub fn turn(&self) -> usize {
        self.cursor + 1
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.turns.len()
    }

    pub fn dispatched(&self) -> &[Action] {
        &self.dispatched
    }

    fn current(&self) -> Option<&Percept> {
        self.turns.get(self.cursor)
    }

    fn line(&self, direction: Direction) -> &[Space] {
        match (self.current(), direction) {
            (Some(percept), Direction::Forward) => percept.forward.as_slice(),
            (Some(percept), Direction::Backward) => percept.backward.as_slice(),
            (None, _) => &[],
        }
    }
}

impl Senses for ScriptedWorld {
    type Cell = Space;

    /// The nearest cell of the line; a line that ends immediately ended at the
    /// dungeon boundary, which feels like a wall.
    fn feel(&self, direction: Direction) -> Space {
        self.line(direction)
            .first()
            .copied()
            .unwrap_or_else(Space::wall)
    }

    fn look(&self, direction: Direction) -> Vec<Space> {
        self.line(direction).to_vec()
    }

    fn health(&self) -> u32 {
        self.current().map_or(0, |percept| percept.health)
    }
}

impl Actuator for ScriptedWorld {
    fn act(&mut self, action: Action) {
        tracing::trace!(turn = self.turn(), %action, "dispatched");
        self.dispatched.push(action);
        self.cursor += 1;
    }
}
