//! Complexity classifier - routes patterns between the two trace generators
//!
//! The detailed engine simulates only a subset of regex: anchors, literals,
//! the shorthand classes `\d` `\w` `\s`, `.`, and single-token quantifiers.
//! This module decides whether a pattern stays inside that subset or must be
//! delegated to the match-only fallback enumerator.
//!
//! The decision rule is a deliberately coarse, false-positive-tolerant
//! heuristic, not a parser. A pattern is judged complex iff it contains:
//!
//! - `(?` or `[?` (a proxy for groups and lookarounds),
//! - a bracketed span with an internal hyphen (character class ranges), or
//! - a braced span with an internal comma (bounded repetition counts).
//!
//! Nothing else is inspected. Malformed patterns are never rejected here;
//! compilation errors surface later, on the fallback path. Callers must treat
//! the result as a best-effort routing decision, not a correctness boundary.
//! The subset boundary can be tightened here without touching the engine.

use once_cell::sync::Lazy;
use regex::Regex;

/// The structural markers the detailed engine cannot simulate
static COMPLEX_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[(\[]\?|\[.*-.*\]|\{.*,.*\}").expect("complexity heuristic regex"));

/// Decide whether a pattern must be routed to the fallback enumerator
///
/// Pure predicate over the pattern text; no validation is performed.
pub fn is_complex(pattern: &str) -> bool {
    COMPLEX_MARKERS.is_match(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_subset_is_not_complex() {
        assert!(!is_complex("abc"));
        assert!(!is_complex("^abc$"));
        assert!(!is_complex("a+b?"));
        assert!(!is_complex(r"\d+\w*"));
        assert!(!is_complex(".*"));
    }

    #[test]
    fn test_group_marker_is_complex() {
        assert!(is_complex("a(?:bc)"));
        assert!(is_complex("a(?=b)"));
        assert!(is_complex("[?]"));
    }

    #[test]
    fn test_class_range_is_complex() {
        assert!(is_complex("[a-z]+"));
        assert!(is_complex("x[0-9]y"));
    }

    #[test]
    fn test_bounded_repetition_is_complex() {
        assert!(is_complex("a{2,4}"));
        assert!(is_complex("a{2,}"));
    }

    #[test]
    fn test_plain_parens_are_not_complex() {
        // No `(?`, no bracket range, no brace comma: plain groups fall through
        // to the detailed path, where parentheses match as literal characters.
        assert!(!is_complex("(a)(b)"));
    }

    #[test]
    fn test_brace_without_comma_is_not_complex() {
        assert!(!is_complex("a{3}"));
    }

    #[test]
    fn test_malformed_patterns_are_still_classified() {
        // Routing only; the unbalanced bracket is someone else's problem.
        assert!(!is_complex("a[b"));
        assert!(is_complex("a[?"));
    }
}
