//! Integration tests for the fallback (match-only) enumerator.

use retrace::{trace_complex, StepKind};

#[test]
fn test_leading_info_then_one_match_step_per_occurrence() {
    let trace = trace_complex("[0-9]{2}", "ab12cd34");
    assert_eq!(trace.steps()[0].kind, StepKind::Info);

    let matches: Vec<(&str, usize)> = trace
        .iter()
        .filter_map(|s| {
            s.final_match
                .as_deref()
                .map(|m| (m, s.string_index.unwrap()))
        })
        .collect();
    assert_eq!(matches, vec![("12", 2), ("34", 6)]);
}

#[test]
fn test_pattern_index_is_never_set() {
    let trace = trace_complex("[a-z]+", "one two three");
    assert!(trace.iter().all(|s| s.pattern_index.is_none()));
}

#[test]
fn test_zero_width_pattern_terminates_and_advances() {
    // `x*` matches the empty string at every offset of "abc"; the enumerator
    // must advance past each one rather than loop.
    let trace = trace_complex("x*", "abc");
    let offsets: Vec<usize> = trace
        .iter()
        .filter(|s| s.final_match.is_some())
        .map(|s| s.string_index.unwrap())
        .collect();
    assert_eq!(offsets, vec![0, 1, 2, 3]);
    for window in offsets.windows(2) {
        assert!(window[1] > window[0]);
    }
}

#[test]
fn test_zero_width_and_real_matches_interleave() {
    let trace = trace_complex("a*", "baab");
    let matches: Vec<(&str, usize)> = trace
        .iter()
        .filter_map(|s| {
            s.final_match
                .as_deref()
                .map(|m| (m, s.string_index.unwrap()))
        })
        .collect();
    assert_eq!(matches, vec![("", 0), ("aa", 1), ("", 3), ("", 4)]);
}

#[test]
fn test_compile_error_produces_single_fail_trace() {
    let trace = trace_complex("a(?=b)", "ab"); // lookahead: unsupported by the host engine
    assert_eq!(trace.len(), 1);
    let step = trace.get(0).unwrap();
    assert_eq!(step.kind, StepKind::Fail);
    assert!(step.text.starts_with("Invalid pattern: "));
}

#[test]
fn test_no_matches_ends_in_generic_fail() {
    let trace = trace_complex("[0-9]{3,}", "no digits here");
    let last = trace.last().unwrap();
    assert_eq!(last.kind, StepKind::Fail);
    assert_eq!(last.text, "Scan complete. No matching signature found.");
    assert_eq!(last.string_index, None);
}

#[test]
fn test_idempotence() {
    let first = trace_complex("[a-c]+", "abcabc");
    let second = trace_complex("[a-c]+", "abcabc");
    assert_eq!(first, second);
}
