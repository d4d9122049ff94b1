//! Decorator behavior nodes.
//!
//! Decorators wrap a single child and modify its result.

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// Used to express negated guards ("no enemy within reach behind") without a
/// dedicated negative condition for every positive one.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        enemies_behind: u32,
    }

    struct EnemyBehind;
    impl Behavior<TestContext> for EnemyBehind {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            Status::from(ctx.enemies_behind > 0)
        }
    }

    #[test]
    fn inverter_turns_success_into_failure() {
        let clear_behind = Inverter::new(Box::new(EnemyBehind));

        let mut ctx = TestContext { enemies_behind: 1 };
        assert_eq!(clear_behind.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn inverter_turns_failure_into_success() {
        let clear_behind = Inverter::new(Box::new(EnemyBehind));

        let mut ctx = TestContext { enemies_behind: 0 };
        assert_eq!(clear_behind.tick(&mut ctx), Status::Success);
    }
}
