//! Integration tests for the detailed (stepwise) trace generator.

use retrace::{trace_detailed, StepKind};

#[test]
fn test_literal_match_starts_at_first_occurrence() {
    let trace = trace_detailed("a", "xxab");
    let located = trace
        .iter()
        .find(|s| s.final_match.is_some())
        .expect("expected a located match");
    assert_eq!(located.string_index, Some(2));
    assert_eq!(located.final_match.as_deref(), Some("a"));
}

#[test]
fn test_offsets_are_tried_in_ascending_order() {
    let trace = trace_detailed("q", "abc");
    let starts: Vec<usize> = trace
        .iter()
        .filter(|s| s.text.starts_with("Starting scan at string index"))
        .map(|s| s.string_index.unwrap())
        .collect();
    assert_eq!(starts, vec![0, 1, 2, 3]);
}

#[test]
fn test_later_candidates_never_tried_after_a_match() {
    let trace = trace_detailed("a", "aa");
    let starts: Vec<usize> = trace
        .iter()
        .filter(|s| s.text.starts_with("Starting scan at string index"))
        .map(|s| s.string_index.unwrap())
        .collect();
    assert_eq!(starts, vec![0]);
}

#[test]
fn test_quantifier_greediness_consumes_all_before_next_token() {
    let trace = trace_detailed("a*b", "aaab");
    assert_eq!(trace.final_match(), Some("aaab"));

    // All three 'a' repetitions are consumed and counted before 'b' is tested.
    let info = trace
        .iter()
        .find(|s| s.text.starts_with("Quantifier"))
        .unwrap();
    assert_eq!(info.text, "Quantifier '*' satisfied with 3 matches.");

    let b_position = trace
        .iter()
        .position(|s| s.text == "Token 'b' matches 'b'")
        .unwrap();
    let info_position = trace
        .iter()
        .position(|s| s.text.starts_with("Quantifier"))
        .unwrap();
    assert!(info_position < b_position);
}

#[test]
fn test_non_backtracking_divergence_is_preserved() {
    // A backtracking engine matches "a*a" against "aaa"; this engine must not.
    let trace = trace_detailed("a*a", "aaa");
    assert!(!trace.found_match());
    assert_eq!(trace.last().unwrap().kind, StepKind::Fail);
}

#[test]
fn test_anchored_pattern_matches_only_exact_subject() {
    assert_eq!(trace_detailed("^abc$", "abc").final_match(), Some("abc"));

    let trace = trace_detailed("^abc$", "xabc");
    assert!(!trace.found_match());
    // Only the single anchored candidate was attempted.
    let scans = trace
        .iter()
        .filter(|s| s.text.starts_with("Starting scan"))
        .count();
    assert_eq!(scans, 1);
}

#[test]
fn test_shorthand_class_with_quantifier_end_to_end() {
    let trace = trace_detailed(r"\d+", "a12b");
    let located = trace.iter().find(|s| s.final_match.is_some()).unwrap();
    assert_eq!(located.final_match.as_deref(), Some("12"));
    assert_eq!(located.string_index, Some(1));
    assert_eq!(trace.last().unwrap().kind, StepKind::Match);
}

#[test]
fn test_exhausted_subject_renders_end_of_string() {
    let trace = trace_detailed("ab", "a");
    assert!(trace
        .iter()
        .any(|s| s.text == "Token 'b' failed to match 'end of string'"));
}

#[test]
fn test_idempotence() {
    let first = trace_detailed("a*b?c", "aabcc");
    let second = trace_detailed("a*b?c", "aabcc");
    assert_eq!(first, second);
}

#[test]
fn test_optional_token_matches_zero_times() {
    let trace = trace_detailed("ab?c", "ac");
    assert_eq!(trace.final_match(), Some("ac"));
    assert!(trace
        .iter()
        .any(|s| s.text == "Quantifier '?' satisfied with 0 matches."));
}

#[test]
fn test_dot_matches_any_character() {
    assert_eq!(trace_detailed("a.c", "axc").final_match(), Some("axc"));
    assert_eq!(trace_detailed("a.c", "a c").final_match(), Some("a c"));
}

#[test]
fn test_step_log_for_shorthand_quantifier_scan() {
    let trace = trace_detailed(r"\d+", "a12b");
    let log = trace
        .iter()
        .map(|s| {
            let kind = match s.kind {
                StepKind::Info => "INFO",
                StepKind::Match => "MATCH",
                StepKind::Fail => "FAIL",
            };
            format!("{} {}", kind, s.text)
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(log, @r"
    INFO Core engaged. Scanning string for pattern signature...
    INFO Starting scan at string index 0.
    FAIL Token '\d+' failed to satisfy minimum of 1 matches.
    INFO Starting scan at string index 1.
    MATCH Token '\d' matches '1'
    MATCH Token '\d' matches '2'
    INFO Quantifier '+' satisfied with 2 matches.
    MATCH Pattern signature locked: 12
    ");
}
