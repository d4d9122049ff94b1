//! Compact text notation for recorded sight lines.
//!
//! A line is written nearest cell first, one glyph per cell, using the same
//! characters as the dungeon map:
//!
//! | glyph        | cell                      |
//! |--------------|---------------------------|
//! | `.` or ` `   | empty floor               |
//! | `>`          | stairs                    |
//! | `\|` or `-`  | wall                      |
//! | `C`          | captive                   |
//! | other letter | enemy with that unit code |

use warrior_core::Space;

/// Cell for a single glyph, or `None` when the glyph means nothing.
pub fn space(glyph: char) -> Option<Space> {
    match glyph {
        '.' | ' ' => Some(Space::empty()),
        '>' => Some(Space::stairs()),
        '|' | '-' => Some(Space::wall()),
        'C' => Some(Space::captive()),
        code if code.is_ascii_alphabetic() => Some(Space::enemy(code)),
        _ => None,
    }
}

/// Parses a whole line, reporting the first unknown glyph.
pub fn line(text: &str) -> Result<Vec<Space>, char> {
    text.chars().map(|glyph| space(glyph).ok_or(glyph)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use warrior_core::Cell;

    #[test]
    fn parses_nearest_first() {
        let spaces = line(".a>|").unwrap();
        assert_eq!(
            spaces,
            [
                Space::empty(),
                Space::enemy('a'),
                Space::stairs(),
                Space::wall()
            ]
        );
    }

    #[test]
    fn captive_is_not_an_enemy() {
        let captive = space('C').unwrap();
        assert!(captive.is_captive());
        assert!(!captive.is_enemy());
    }

    #[test]
    fn empty_text_is_an_empty_line() {
        assert_eq!(line(""), Ok(Vec::new()));
    }

    #[test]
    fn reports_unknown_glyph() {
        assert_eq!(line("..@"), Err('@'));
    }
}
