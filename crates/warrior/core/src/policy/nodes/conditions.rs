//! Condition nodes for the policy tree.
//!
//! Conditions read [`PolicyContext`] and return Success or Failure. They never
//! choose an action.

use behavior_tree::{Behavior, Status};

use crate::config::PolicyConfig;
use crate::perception::Adjacent;
use crate::policy::PolicyContext;

/// Health dropped since the previous turn.
pub struct IsDying;

impl Behavior<PolicyContext> for IsDying {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        Status::from(ctx.dying)
    }
}

/// Current health is at or below `threshold`.
pub struct IsHealthAtMost {
    pub threshold: u32,
}

impl Behavior<PolicyContext> for IsHealthAtMost {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        Status::from(ctx.health <= self.threshold)
    }
}

/// No enemy ahead is fighting the warrior.
///
/// Succeeds when no enemy is in sight ahead, or when the nearest one is a
/// melee unit that has not reached the adjacent cell yet. An archer in sight
/// always counts as engaging.
pub struct NoThreatEngagingAhead;

impl Behavior<PolicyContext> for NoThreatEngagingAhead {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        Status::from(ctx.perception.no_threat_engaging_ahead())
    }
}

/// An enemy is the first thing in sight ahead.
pub struct IsEnemyAhead;

impl Behavior<PolicyContext> for IsEnemyAhead {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        Status::from(ctx.perception.enemy_ahead.is_some())
    }
}

/// An enemy is the first occupant within the retreat window behind.
pub struct IsEnemyCloseBehind;

impl Behavior<PolicyContext> for IsEnemyCloseBehind {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        Status::from(ctx.perception.enemy_close_behind)
    }
}

/// The first occupant anywhere behind is an archer.
pub struct IsArcherBehind;

impl Behavior<PolicyContext> for IsArcherBehind {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        Status::from(ctx.perception.archer_behind)
    }
}

/// Something worth turning towards is the first occupant behind.
pub struct IsEnemyOrCaptiveBehind;

impl Behavior<PolicyContext> for IsEnemyOrCaptiveBehind {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        let perception = &ctx.perception;
        Status::from(perception.enemy_behind.is_some() || perception.captive_behind)
    }
}

/// A wall closes the line ahead and no stairs lie before it.
pub struct IsDeadEndAhead;

impl Behavior<PolicyContext> for IsDeadEndAhead {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        let perception = &ctx.perception;
        Status::from(perception.wall_ahead && !perception.stairs_ahead)
    }
}

/// The adjacent cell ahead is of the given kind.
pub struct IsAdjacent(pub Adjacent);

impl Behavior<PolicyContext> for IsAdjacent {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        Status::from(ctx.perception.adjacent == self.0)
    }
}

/// The warrior should spend this turn resting.
///
/// Rests when not taking damage and either wounded down to the rest
/// threshold, or already resting and not yet back to full health.
pub struct ShouldRest;

impl Behavior<PolicyContext> for ShouldRest {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        let wounded = ctx.health <= PolicyConfig::REST_THRESHOLD;
        let recovering = ctx.was_resting && ctx.health < PolicyConfig::MAX_HEALTH;

        Status::from(!ctx.dying && (wounded || recovering))
    }
}
