//! Perception: turning one turn's raw senses into named facts.
//!
//! [`Surroundings`] holds what was sensed this turn relative to the warrior's
//! facing and answers the directional queries. [`Perception`] is the small,
//! copyable set of facts the policy actually consumes.

use crate::cell::Cell;
use crate::config::PolicyConfig;
use crate::direction::Direction;
use crate::senses::Senses;
use crate::sight;

/// Raw senses for one turn, oriented to the warrior's facing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surroundings<C> {
    /// The cell directly ahead.
    pub adjacent: C,
    /// Sight line in the facing direction.
    pub ahead: Vec<C>,
    /// Sight line in the opposite direction.
    pub behind: Vec<C>,
}

impl<C: Cell> Surroundings<C> {
    pub fn new(adjacent: C, ahead: Vec<C>, behind: Vec<C>) -> Self {
        Self {
            adjacent,
            ahead,
            behind,
        }
    }

    /// Senses the surroundings of a warrior facing `facing`.
    ///
    /// Costs one `feel` and two `look` calls.
    pub fn sense<S>(senses: &S, facing: Direction) -> Self
    where
        S: Senses<Cell = C> + ?Sized,
    {
        Self {
            adjacent: senses.feel(facing),
            ahead: senses.look(facing),
            behind: senses.look(facing.opposite()),
        }
    }

    pub fn enemy_ahead(&self) -> Option<char> {
        sight::enemy_sighted(&self.ahead)
    }

    pub fn enemy_behind(&self) -> Option<char> {
        sight::enemy_sighted(&self.behind)
    }

    pub fn wall_ahead(&self) -> bool {
        sight::wall_sighted(&self.ahead)
    }

    pub fn stairs_ahead(&self) -> bool {
        sight::stairs_sighted(&self.ahead)
    }

    pub fn captive_behind(&self) -> bool {
        sight::captive_sighted(&self.behind)
    }

    /// An enemy is the first occupant within the nearest cells behind.
    pub fn enemy_close_behind(&self) -> bool {
        let window = self.behind.len().min(PolicyConfig::RETREAT_WINDOW);
        sight::enemy_sighted(&self.behind[..window]).is_some()
    }

    pub fn archer_behind(&self) -> bool {
        sight::archer_sighted(&self.behind)
    }

    pub fn perceive(&self) -> Perception {
        Perception {
            adjacent: Adjacent::classify(&self.adjacent),
            enemy_ahead: self.enemy_ahead(),
            wall_ahead: self.wall_ahead(),
            stairs_ahead: self.stairs_ahead(),
            enemy_behind: self.enemy_behind(),
            captive_behind: self.captive_behind(),
            enemy_close_behind: self.enemy_close_behind(),
            archer_behind: self.archer_behind(),
        }
    }
}

/// What occupies the cell directly ahead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Adjacent {
    #[default]
    Empty,
    Wall,
    Captive,
    /// An enemy, or anything else that is not a wall or a captive.
    Occupied,
}

impl Adjacent {
    pub fn classify<C: Cell>(cell: &C) -> Self {
        if cell.is_empty() {
            Adjacent::Empty
        } else if cell.is_wall() {
            Adjacent::Wall
        } else if cell.is_captive() {
            Adjacent::Captive
        } else {
            Adjacent::Occupied
        }
    }
}

/// Facts derived from one turn's surroundings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Perception {
    pub adjacent: Adjacent,
    /// Unit code of the nearest enemy ahead, when an enemy is the first thing
    /// in sight.
    pub enemy_ahead: Option<char>,
    pub wall_ahead: bool,
    pub stairs_ahead: bool,
    pub enemy_behind: Option<char>,
    pub captive_behind: bool,
    /// An enemy within [`PolicyConfig::RETREAT_WINDOW`] cells behind.
    pub enemy_close_behind: bool,
    pub archer_behind: bool,
}

impl Perception {
    /// Nothing ahead is effectively fighting the warrior: no enemy in sight,
    /// or a melee enemy that has not yet closed in.
    pub fn no_threat_engaging_ahead(&self) -> bool {
        match self.enemy_ahead {
            None => true,
            Some(code) => self.adjacent == Adjacent::Empty && code != PolicyConfig::ARCHER,
        }
    }
}
