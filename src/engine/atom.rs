//! Atoms and quantifiers - the token vocabulary of the simulated engine
//!
//! An atom is a single matchable unit: `.`, one of the two-character shorthand
//! classes `\d` `\w` `\s`, or a literal character. A backslash followed by
//! anything other than `d`, `w`, or `s` is treated as a literal backslash, as
//! is a trailing backslash. Atoms are scanned straight off the pattern's
//! character sequence; there is no escape table and no precompilation.

use std::fmt;

/// A single matchable unit in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// `.` - any character
    Any,
    /// `\d` - an ASCII digit
    Digit,
    /// `\w` - an ASCII letter, digit, or underscore
    Word,
    /// `\s` - whitespace
    Space,
    /// An exact character, compared case-sensitively
    Literal(char),
}

impl Atom {
    /// Scan the atom starting at `at`, returning it with its character length
    ///
    /// Callers guarantee `at < pattern.len()`. Shorthand classes are the only
    /// two-character atoms; everything else is one character.
    pub fn scan(pattern: &[char], at: usize) -> (Atom, usize) {
        match pattern[at] {
            '.' => (Atom::Any, 1),
            '\\' => match pattern.get(at + 1) {
                Some('d') => (Atom::Digit, 2),
                Some('w') => (Atom::Word, 2),
                Some('s') => (Atom::Space, 2),
                _ => (Atom::Literal('\\'), 1),
            },
            ch => (Atom::Literal(ch), 1),
        }
    }

    /// Test this atom against a subject character
    ///
    /// `None` means the subject is exhausted, which no atom matches.
    pub fn matches(&self, ch: Option<char>) -> bool {
        let Some(ch) = ch else {
            return false;
        };
        match self {
            Atom::Any => true,
            Atom::Digit => ch.is_ascii_digit(),
            Atom::Word => ch.is_ascii_alphanumeric() || ch == '_',
            Atom::Space => ch.is_whitespace(),
            Atom::Literal(literal) => *literal == ch,
        }
    }
}

impl fmt::Display for Atom {
    /// Render the atom exactly as it appears in the pattern
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Any => write!(f, "."),
            Atom::Digit => write!(f, "\\d"),
            Atom::Word => write!(f, "\\w"),
            Atom::Space => write!(f, "\\s"),
            Atom::Literal(ch) => write!(f, "{}", ch),
        }
    }
}

/// A quantifier binding to the immediately preceding atom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `*` - zero or more
    ZeroOrMore,
    /// `+` - one or more
    OneOrMore,
    /// `?` - zero or one
    ZeroOrOne,
}

impl Quantifier {
    /// Recognize a quantifier character
    pub fn from_char(ch: char) -> Option<Quantifier> {
        match ch {
            '*' => Some(Quantifier::ZeroOrMore),
            '+' => Some(Quantifier::OneOrMore),
            '?' => Some(Quantifier::ZeroOrOne),
            _ => None,
        }
    }

    /// Minimum number of repetitions required
    pub fn min(&self) -> usize {
        match self {
            Quantifier::OneOrMore => 1,
            _ => 0,
        }
    }

    /// Maximum number of repetitions, `None` meaning unbounded
    pub fn max(&self) -> Option<usize> {
        match self {
            Quantifier::ZeroOrOne => Some(1),
            _ => None,
        }
    }

    /// The quantifier's source character
    pub fn symbol(&self) -> char {
        match self {
            Quantifier::ZeroOrMore => '*',
            Quantifier::OneOrMore => '+',
            Quantifier::ZeroOrOne => '?',
        }
    }
}
