//! Property-based tests for the trace generators
//!
//! These ensure the generators are total over their input space: no panics,
//! no empty traces, no hidden state between calls.

use proptest::prelude::*;

use retrace::{trace_detailed, StepKind};

/// Generate patterns inside the simulated subset: optionally anchored
/// sequences of atoms with optional single-token quantifiers
fn simple_pattern_strategy() -> impl Strategy<Value = String> {
    let atom = prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("0".to_string()),
        Just(".".to_string()),
        Just(r"\d".to_string()),
        Just(r"\w".to_string()),
        Just(r"\s".to_string()),
    ];
    let quantifier = prop_oneof![
        Just("".to_string()),
        Just("*".to_string()),
        Just("+".to_string()),
        Just("?".to_string()),
    ];
    let token = (atom, quantifier).prop_map(|(a, q)| format!("{}{}", a, q));

    (
        prop::bool::ANY,
        prop::collection::vec(token, 1..5),
        prop::bool::ANY,
    )
        .prop_map(|(anchor_start, tokens, anchor_end)| {
            let mut pattern = String::new();
            if anchor_start {
                pattern.push('^');
            }
            pattern.push_str(&tokens.concat());
            if anchor_end {
                pattern.push('$');
            }
            pattern
        })
}

/// Generate short, human-typed-looking subjects
fn subject_strategy() -> impl Strategy<Value = String> {
    "[ab01 _]{0,8}"
}

proptest! {
    #[test]
    fn detailed_trace_is_never_empty(
        pattern in simple_pattern_strategy(),
        subject in subject_strategy(),
    ) {
        let trace = trace_detailed(&pattern, &subject);
        prop_assert!(!trace.is_empty());
    }

    #[test]
    fn detailed_trace_ends_in_match_or_fail(
        pattern in simple_pattern_strategy(),
        subject in subject_strategy(),
    ) {
        let trace = trace_detailed(&pattern, &subject);
        let last = trace.last().unwrap();
        prop_assert!(matches!(last.kind, StepKind::Match | StepKind::Fail));
    }

    #[test]
    fn detailed_trace_is_idempotent(
        pattern in simple_pattern_strategy(),
        subject in subject_strategy(),
    ) {
        prop_assert_eq!(
            trace_detailed(&pattern, &subject),
            trace_detailed(&pattern, &subject)
        );
    }

    #[test]
    fn located_match_is_a_substring_at_its_offset(
        pattern in simple_pattern_strategy(),
        subject in subject_strategy(),
    ) {
        let trace = trace_detailed(&pattern, &subject);
        if let Some(step) = trace.iter().find(|s| s.final_match.is_some()) {
            let matched = step.final_match.as_deref().unwrap();
            let start = step.string_index.unwrap();
            let chars: Vec<char> = subject.chars().collect();
            let at_offset: String = chars
                .iter()
                .skip(start)
                .take(matched.chars().count())
                .collect();
            prop_assert_eq!(matched, at_offset.as_str());
        }
    }

    #[test]
    fn router_is_total_over_arbitrary_patterns(
        pattern in "[ -~]{0,12}",
        subject in "[ -~]{0,12}",
    ) {
        // Any printable-ASCII pattern either traces in detail, enumerates via
        // the host engine, or reports its compile error as trace data. Never
        // a panic, never an empty trace.
        let trace = retrace::trace(&pattern, &subject);
        prop_assert!(!trace.is_empty());
    }
}
