//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing `Box::new(Sequence::new(vec![...]))` for every branch of
//! a rule table, use the shorthands here: `sequence(vec![...])`,
//! `selector(vec![...])`, `when(guard, then)`.

use crate::{Behavior, Inverter, Selector, Sequence};

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Guarded branch: `guard` must succeed before `then` runs.
///
/// Shorthand for `sequence(vec![guard, then])`, the shape every prioritized
/// rule takes.
#[inline]
pub fn when<C: 'static>(
    guard: Box<dyn Behavior<C>>,
    then: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    sequence(vec![guard, then])
}
