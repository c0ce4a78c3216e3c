//! The permitted character set for MT799 field content.
//!
//! MT799 fields are limited to a single alphanumeric character-set class:
//! `A-Z a-z 0-9 / - ? : ( ) . , ' + space CR LF`. The set is process-wide
//! and read-only, so it is shared across concurrent calls without
//! synchronization.

use once_cell::sync::Lazy;

const PERMITTED_PUNCTUATION: &[char] = &[
    '/', '-', '?', ':', '(', ')', '.', ',', '\'', '+', ' ', '\r', '\n',
];

/// ASCII lookup table: `true` at index `c` means character `c` is permitted
/// in MT799 field content.
static PERMITTED: Lazy<[bool; 128]> = Lazy::new(|| {
    let mut table = [false; 128];
    for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
        table[c as usize] = true;
    }
    for &c in PERMITTED_PUNCTUATION {
        table[c as usize] = true;
    }
    table
});

/// Whether `c` belongs to the permitted set.
pub fn is_permitted(c: char) -> bool {
    (c as usize) < 128 && PERMITTED[c as usize]
}

/// The first character of `value` outside the permitted set, with its
/// zero-based character position.
pub fn first_violation(value: &str) -> Option<(usize, char)> {
    value.chars().enumerate().find(|(_, c)| !is_permitted(*c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumerics_are_permitted() {
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            assert!(is_permitted(c), "{:?} should be permitted", c);
        }
    }

    #[test]
    fn test_punctuation_and_line_breaks_are_permitted() {
        for c in ['/', '-', '?', ':', '(', ')', '.', ',', '\'', '+', ' ', '\r', '\n'] {
            assert!(is_permitted(c), "{:?} should be permitted", c);
        }
    }

    #[test]
    fn test_rejected_characters() {
        for c in ['@', '#', '$', '%', '&', '*', '=', '{', '}', '|', '\t', 'é', '€'] {
            assert!(!is_permitted(c), "{:?} should be rejected", c);
        }
    }

    #[test]
    fn test_first_violation_reports_position_and_character() {
        assert_eq!(first_violation("ABC@DEF"), Some((3, '@')));
        assert_eq!(first_violation("REFERENCE-1"), None);
        assert_eq!(first_violation("#ABC"), Some((0, '#')));
    }
}
