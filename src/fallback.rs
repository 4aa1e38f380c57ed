//! Fallback enumerator - match-only tracing for complex patterns
//!
//! Patterns the classifier routes here are outside the subset the detailed
//! engine can simulate, so no stepwise decisions are available. Instead the
//! host engine (the `regex` crate, used strictly as a black box) enumerates
//! whole matches, and the trace reports one MATCH step per occurrence. A
//! leading INFO step tells consumers that detailed stepping is disabled.
//!
//! The search position advances past each match, and by at least one full
//! character when a match is zero-length, so zero-width-matchable patterns
//! (`a*` against `"bb"`, a lone `^`) cannot loop forever.

use regex::Regex;

use crate::trace::{Trace, TraceStep};

/// Enumerate whole host-engine matches of `pattern` against `subject`
///
/// Never panics: a pattern the host engine rejects produces a trace with a
/// single FAIL step carrying the compilation error message. Zero matches
/// produce a single trailing FAIL step. `pattern_index` is never set on
/// these steps; `string_index` is the match's character offset.
pub fn trace_complex(pattern: &str, subject: &str) -> Trace {
    let mut trace = Trace::new();
    trace.push(TraceStep::info(
        "Complex pattern detected. Switching to match-only enumeration.",
    ));

    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(error) => {
            let mut trace = Trace::new();
            trace.push(TraceStep::failed(format!("Invalid pattern: {}", error)));
            return trace;
        }
    };

    let mut at = 0;
    let mut found = false;
    while at <= subject.len() {
        let Some(m) = re.find_at(subject, at) else {
            break;
        };
        found = true;

        let char_start = subject[..m.start()].chars().count();
        trace.push(
            TraceStep::matched(format!("Pattern signature locked: {}", m.as_str()))
                .with_string_index(char_start)
                .with_final_match(m.as_str()),
        );

        at = if m.is_empty() {
            // Force progress on zero-length matches: skip the next character.
            match subject[m.end()..].chars().next() {
                Some(ch) => m.end() + ch.len_utf8(),
                None => break,
            }
        } else {
            m.end()
        };
    }

    if !found {
        trace.push(TraceStep::failed(
            "Scan complete. No matching signature found.",
        ));
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepKind;

    #[test]
    fn test_leading_info_step() {
        let trace = trace_complex("[a-z]+", "abc");
        assert_eq!(trace.get(0).unwrap().kind, StepKind::Info);
        assert_eq!(
            trace.get(0).unwrap().text,
            "Complex pattern detected. Switching to match-only enumeration."
        );
    }

    #[test]
    fn test_enumerates_every_occurrence() {
        let trace = trace_complex("[0-9]{2,3}", "ab12cd345");
        let matches: Vec<_> = trace
            .iter()
            .filter_map(|s| s.final_match.as_deref())
            .collect();
        assert_eq!(matches, vec!["12", "345"]);
    }

    #[test]
    fn test_match_steps_carry_start_offset_but_no_pattern_index() {
        let trace = trace_complex("[0-9]+", "ab12");
        let step = trace.iter().find(|s| s.final_match.is_some()).unwrap();
        assert_eq!(step.string_index, Some(2));
        assert_eq!(step.pattern_index, None);
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        // `a*` matches the empty string at every position of "bb".
        let trace = trace_complex("a*", "bb");
        let empties = trace
            .iter()
            .filter(|s| s.final_match.as_deref() == Some(""))
            .count();
        assert_eq!(empties, 3); // offsets 0, 1, 2
    }

    #[test]
    fn test_compile_error_is_a_single_fail_step() {
        let trace = trace_complex("(?P<", "aaaa");
        assert_eq!(trace.len(), 1);
        let step = trace.get(0).unwrap();
        assert_eq!(step.kind, StepKind::Fail);
        assert!(step.text.starts_with("Invalid pattern: "));
    }

    #[test]
    fn test_no_match_ends_in_generic_fail() {
        let trace = trace_complex("[0-9]+", "abc");
        let last = trace.last().unwrap();
        assert_eq!(last.kind, StepKind::Fail);
        assert_eq!(last.text, "Scan complete. No matching signature found.");
    }

    #[test]
    fn test_multibyte_subject_offsets_are_character_indices() {
        let trace = trace_complex("[0-9]+", "héllo42");
        let step = trace.iter().find(|s| s.final_match.is_some()).unwrap();
        assert_eq!(step.string_index, Some(5));
    }
}
