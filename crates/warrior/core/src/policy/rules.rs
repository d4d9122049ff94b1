//! The rule table, one subtree per [`Rule`].
//!
//! Every rule is a guarded branch: its conditions, then the action node that
//! writes the decision. [`RuleBranch`] attributes a successful branch to its
//! rule so the decision can be logged and tested by rule.
//!
//! ```text
//! warrior()
//!   └─ Selector
//!       ├─ enemy_behind()    NoThreatEngagingAhead, IsDying → Pivot
//!       ├─ retreat()         IsHealthAtMost, IsDying, !IsEnemyCloseBehind, !IsArcherBehind → BackAway
//!       ├─ ranged_engage()   IsEnemyAhead → Shoot
//!       ├─ reposition()      (IsEnemyOrCaptiveBehind | IsDeadEndAhead) → Pivot
//!       ├─ empty_cell()      IsAdjacent(Empty) → (ShouldRest → Rest | Advance)
//!       └─ occupied_cell()   IsAdjacent(Wall) → Pivot | IsAdjacent(Captive) → Rescue | Attack
//! ```

use behavior_tree::builder::{inverter, selector, sequence, when};
use behavior_tree::{Behavior, Status};

use crate::config::PolicyConfig;
use crate::perception::Adjacent;

use super::context::PolicyContext;
use super::nodes::*;
use super::rule::Rule;

/// Type alias for policy subtrees.
pub type BehaviorTree = Box<dyn Behavior<PolicyContext>>;

/// Attributes the decision made inside `body` to `rule`.
pub struct RuleBranch {
    rule: Rule,
    body: BehaviorTree,
}

impl RuleBranch {
    pub fn new(rule: Rule, body: BehaviorTree) -> Self {
        Self { rule, body }
    }
}

impl Behavior<PolicyContext> for RuleBranch {
    fn tick(&self, ctx: &mut PolicyContext) -> Status {
        let status = self.body.tick(ctx);
        tracing::trace!(rule = %self.rule, ?status, "rule evaluated");

        if status.is_success() && ctx.has_action() {
            ctx.attribute(self.rule);
            Status::Success
        } else {
            Status::Failure
        }
    }
}

fn branch(rule: Rule, body: BehaviorTree) -> BehaviorTree {
    Box::new(RuleBranch::new(rule, body))
}

/// The full policy, rules in priority order.
pub fn warrior() -> BehaviorTree {
    selector(vec![
        enemy_behind(),
        retreat(),
        ranged_engage(),
        reposition(),
        empty_cell(),
        occupied_cell(),
    ])
}

/// Taking damage with nothing fighting ahead means the attacker is behind.
pub fn enemy_behind() -> BehaviorTree {
    branch(
        Rule::EnemyBehind,
        sequence(vec![
            Box::new(NoThreatEngagingAhead),
            Box::new(IsDying),
            Box::new(Pivot),
        ]),
    )
}

/// Back out of a losing fight when the way back is clear.
pub fn retreat() -> BehaviorTree {
    branch(
        Rule::Retreat,
        sequence(vec![
            Box::new(IsHealthAtMost {
                threshold: PolicyConfig::RETREAT_THRESHOLD,
            }),
            Box::new(IsDying),
            inverter(Box::new(IsEnemyCloseBehind)),
            inverter(Box::new(IsArcherBehind)),
            Box::new(BackAway),
        ]),
    )
}

pub fn ranged_engage() -> BehaviorTree {
    branch(
        Rule::RangedEngage,
        when(Box::new(IsEnemyAhead), Box::new(Shoot)),
    )
}

pub fn reposition() -> BehaviorTree {
    branch(
        Rule::Reposition,
        when(
            selector(vec![
                Box::new(IsEnemyOrCaptiveBehind),
                Box::new(IsDeadEndAhead),
            ]),
            Box::new(Pivot),
        ),
    )
}

/// Nothing adjacent: rest or advance.
pub fn empty_cell() -> BehaviorTree {
    branch(
        Rule::EmptyCell,
        when(
            Box::new(IsAdjacent(Adjacent::Empty)),
            selector(vec![
                when(Box::new(ShouldRest), Box::new(Rest)),
                Box::new(Advance),
            ]),
        ),
    )
}

/// Deal with whatever occupies the adjacent cell. Never fails.
pub fn occupied_cell() -> BehaviorTree {
    branch(
        Rule::OccupiedCell,
        selector(vec![
            when(Box::new(IsAdjacent(Adjacent::Wall)), Box::new(Pivot)),
            when(Box::new(IsAdjacent(Adjacent::Captive)), Box::new(Rescue)),
            Box::new(Attack),
        ]),
    )
}
