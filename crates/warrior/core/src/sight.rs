//! Sight-line primitives.
//!
//! A sight line is a slice of cells ordered nearest first. Every query here is
//! total: an empty line answers `false`/`None`.

use crate::cell::Cell;
use crate::config::PolicyConfig;

/// Nearest cell that is not empty.
pub fn first_nonempty<C: Cell>(line: &[C]) -> Option<&C> {
    line.iter().find(|cell| !cell.is_empty())
}

/// Whether the first thing worth noticing along the line is a staircase.
///
/// Unlike the other queries this does not start from [`first_nonempty`]:
/// bare stairs report as empty, so the scan stops at the first cell that is
/// either occupied *or* has stairs. An occupant standing nearer than the
/// stairs hides them.
pub fn stairs_sighted<C: Cell>(line: &[C]) -> bool {
    line.iter()
        .find(|cell| !cell.is_empty() || cell.is_stairs())
        .is_some_and(|cell| cell.is_stairs())
}

pub fn wall_sighted<C: Cell>(line: &[C]) -> bool {
    first_nonempty(line).is_some_and(|cell| cell.is_wall())
}

pub fn captive_sighted<C: Cell>(line: &[C]) -> bool {
    first_nonempty(line).is_some_and(|cell| cell.is_captive())
}

/// Unit code of the enemy nearest along the line, if the nearest occupant is
/// an enemy at all.
pub fn enemy_sighted<C: Cell>(line: &[C]) -> Option<char> {
    first_nonempty(line).and_then(|cell| cell.enemy_code())
}

pub fn archer_sighted<C: Cell>(line: &[C]) -> bool {
    enemy_sighted(line) == Some(PolicyConfig::ARCHER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Space, Unit};
    use proptest::prelude::*;

    #[test]
    fn empty_line_reports_nothing() {
        let line: [Space; 0] = [];
        assert!(first_nonempty(&line).is_none());
        assert!(!stairs_sighted(&line));
        assert!(!wall_sighted(&line));
        assert!(!captive_sighted(&line));
        assert_eq!(enemy_sighted(&line), None);
        assert!(!archer_sighted(&line));
    }

    #[test]
    fn all_empty_line_reports_nothing() {
        let line = [Space::empty(), Space::empty(), Space::empty()];
        assert!(first_nonempty(&line).is_none());
        assert!(!wall_sighted(&line));
        assert_eq!(enemy_sighted(&line), None);
    }

    #[test]
    fn single_cell_line() {
        assert!(wall_sighted(&[Space::wall()]));
        assert!(captive_sighted(&[Space::captive()]));
        assert_eq!(enemy_sighted(&[Space::enemy('s')]), Some('s'));
    }

    #[test]
    fn first_nonempty_skips_empty_cells() {
        let line = [Space::empty(), Space::enemy('s'), Space::wall()];
        assert_eq!(first_nonempty(&line), Some(&Space::enemy('s')));
    }

    #[test]
    fn stairs_count_even_when_empty() {
        let line = [Space::stairs(), Space::wall()];
        assert!(stairs_sighted(&line));
        // Wall checks look straight past bare stairs.
        assert!(wall_sighted(&line));
    }

    #[test]
    fn nearer_occupant_hides_stairs() {
        let line = [Space::empty(), Space::captive(), Space::stairs()];
        assert!(!stairs_sighted(&line));
    }

    #[test]
    fn occupied_stairs_are_still_stairs() {
        let line = [Space::stairs().with_unit(Unit::Enemy('s'))];
        assert!(stairs_sighted(&line));
    }

    #[test]
    fn wall_behind_enemy_is_not_sighted() {
        let line = [Space::enemy('S'), Space::wall()];
        assert!(!wall_sighted(&line));
    }

    #[test]
    fn captive_is_not_an_enemy_sighting() {
        let line = [Space::captive(), Space::enemy('a')];
        assert_eq!(enemy_sighted(&line), None);
        assert!(!archer_sighted(&line));
        assert!(captive_sighted(&line));
    }

    #[test]
    fn archer_is_recognized_by_code() {
        assert!(archer_sighted(&[Space::empty(), Space::enemy('a')]));
        assert_eq!(enemy_sighted(&[Space::enemy('a')]), Some('a'));
        assert!(!archer_sighted(&[Space::enemy('w')]));
        assert!(!archer_sighted(&[Space::enemy('s'), Space::enemy('a')]));
    }

    fn space() -> impl Strategy<Value = Space> {
        prop_oneof![
            4 => Just(Space::empty()),
            1 => Just(Space::wall()),
            1 => Just(Space::stairs()),
            1 => Just(Space::captive()),
            1 => prop::sample::select(vec!['a', 's', 'S', 'w']).prop_map(Space::enemy),
        ]
    }

    proptest! {
        #[test]
        fn first_nonempty_is_the_nearest_occupant(line in prop::collection::vec(space(), 0..8)) {
            match first_nonempty(&line) {
                None => prop_assert!(line.iter().all(Cell::is_empty)),
                Some(found) => {
                    let index = line.iter().position(|cell| !cell.is_empty()).unwrap();
                    prop_assert_eq!(found, &line[index]);
                    prop_assert!(line[..index].iter().all(Cell::is_empty));
                }
            }
        }

        #[test]
        fn archer_sighted_agrees_with_enemy_code(line in prop::collection::vec(space(), 0..8)) {
            prop_assert_eq!(archer_sighted(&line), enemy_sighted(&line) == Some('a'));
        }
    }
}
