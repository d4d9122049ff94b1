use strum::{Display, EnumIter, IntoStaticStr};

use crate::action::Action;

/// The prioritized rules of the warrior's policy, highest priority first.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
    /// Hurt with nothing fighting ahead: the attacker must be behind. Turn.
    EnemyBehind,
    /// Low and still losing health with a clear path back: walk away.
    Retreat,
    /// Enemy in sight ahead: shoot it.
    RangedEngage,
    /// Something worth facing is behind, or a dead end lies ahead: turn.
    Reposition,
    /// Nothing adjacent: rest if needed, otherwise advance.
    EmptyCell,
    /// Something adjacent: turn from walls, rescue captives, attack the rest.
    OccupiedCell,
}

/// The action chosen for a turn and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub rule: Rule,
    pub action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn rules_are_listed_in_priority_order() {
        let rules: Vec<Rule> = Rule::iter().collect();
        let mut sorted = rules.clone();
        sorted.sort();
        assert_eq!(rules, sorted);
        assert_eq!(rules.first(), Some(&Rule::EnemyBehind));
        assert_eq!(rules.last(), Some(&Rule::OccupiedCell));
    }

    #[test]
    fn rule_names_are_kebab_case() {
        assert_eq!(Rule::RangedEngage.to_string(), "ranged-engage");
        assert_eq!(Rule::EmptyCell.to_string(), "empty-cell");
    }
}
