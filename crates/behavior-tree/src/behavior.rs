//! Core behavior trait.
//!
//! [`Behavior`] is the single abstraction every node implements. It is generic
//! over the blackboard type `C` so that a policy can define its own context
//! (perceived facts, agent memory, the slot the chosen action lands in).

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against the given blackboard.
    ///
    /// Conditions only read `ctx`; action nodes may write their result into it.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Lets `Box<dyn Behavior<C>>` be used wherever a node is expected, which is
/// what allows heterogeneous children in composites.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
