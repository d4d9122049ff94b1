//! The warrior: perception and policy composed behind one per-turn call.

use crate::action::Action;
use crate::direction::Direction;
use crate::error::Result;
use crate::perception::Surroundings;
use crate::policy::{Decision, Policy};
use crate::senses::{Actuator, Senses};
use crate::state::TurnState;

/// Decision engine for a single warrior.
///
/// Owns the one turn of memory the policy needs and nothing else. Call
/// [`Warrior::play_turn`] (or [`Warrior::decide`] when the host dispatches
/// actions itself) exactly once per turn.
#[derive(Debug, Default)]
pub struct Warrior {
    policy: Policy,
    state: TurnState,
}

impl Warrior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes from a previously recorded turn state.
    pub fn with_state(state: TurnState) -> Self {
        Self {
            policy: Policy::new(),
            state,
        }
    }

    pub fn facing(&self) -> Direction {
        self.state.facing
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn previous_action(&self) -> Option<Action> {
        self.state.previous_action
    }

    /// Senses, decides, and records this turn.
    ///
    /// The turn state is only advanced once a decision has been made; on error
    /// it is left untouched.
    pub fn decide<S>(&mut self, senses: &S) -> Result<Decision>
    where
        S: Senses + ?Sized,
    {
        let health = senses.health();
        let surroundings = Surroundings::sense(senses, self.state.facing);
        let perception = surroundings.perceive();

        tracing::debug!(?perception, health, facing = %self.state.facing, "perceived");

        let decision = self.policy.decide(perception, &self.state, health)?;
        self.state = self.state.advance(decision.action, health);

        if decision.action == Action::Pivot {
            tracing::debug!(facing = %self.state.facing, "turned around");
        }

        Ok(decision)
    }

    /// Plays one full turn: decide, then hand the action to the world.
    pub fn play_turn<W>(&mut self, world: &mut W) -> Result<Decision>
    where
        W: Senses + Actuator + ?Sized,
    {
        let decision = self.decide(&*world)?;
        world.act(decision.action);
        Ok(decision)
    }
}
