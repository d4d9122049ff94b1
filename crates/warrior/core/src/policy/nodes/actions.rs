//! Action nodes for the policy tree.
//!
//! Each node writes one [`Action`] into the context and succeeds. Directional
//! actions are aimed relative to the facing recorded in the context.

use behavior_tree::{Behavior, Status};

use crate::action::Action;
use crate::policy::PolicyContext;

/// Turns around.
pub struct Pivot;

impl Behavior<PolicyContext> for Pivot {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        ctx.set_action(Action::Pivot);
        Status::Success
    }
}

/// Rests in place.
pub struct Rest;

impl Behavior<PolicyContext> for Rest {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        ctx.set_action(Action::Rest);
        Status::Success
    }
}

/// Walks one cell in the facing direction.
pub struct Advance;

impl Behavior<PolicyContext> for Advance {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        ctx.set_action(Action::Walk(ctx.facing));
        Status::Success
    }
}

/// Walks one cell away from the facing direction without turning.
pub struct BackAway;

impl Behavior<PolicyContext> for BackAway {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        ctx.set_action(Action::Walk(ctx.facing.opposite()));
        Status::Success
    }
}

/// Shoots along the facing direction.
pub struct Shoot;

impl Behavior<PolicyContext> for Shoot {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        ctx.set_action(Action::Shoot(ctx.facing));
        Status::Success
    }
}

/// Attacks the adjacent cell ahead.
pub struct Attack;

impl Behavior<PolicyContext> for Attack {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        ctx.set_action(Action::Attack(ctx.facing));
        Status::Success
    }
}

/// Rescues the captive on the adjacent cell ahead.
pub struct Rescue;

impl Behavior<PolicyContext> for Rescue {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        ctx.set_action(Action::Rescue(ctx.facing));
        Status::Success
    }
}
