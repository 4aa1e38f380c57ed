//! Detailed trace generator - the hand-rolled, stepwise matching engine
//!
//! This is a deliberately restricted re-implementation of matching semantics,
//! kept fully isolated from the host `regex` crate so the trace granularity
//! stays under our control. It simulates anchors (`^`, `$`), literal atoms,
//! the shorthand classes `\d` `\w` `\s`, `.`, and single-token quantifiers,
//! and emits one [`TraceStep`](crate::trace::TraceStep) per decision.
//!
//! The generation pipeline is:
//! 1. one engaged INFO step,
//! 2. candidate start offsets (only offset 0 when the pattern is `^`-anchored,
//!    otherwise every offset in ascending order - leftmost match wins),
//! 3. per candidate: a scan INFO step, the leading-anchor check, then the
//!    single-pass walk in [`matcher`],
//! 4. a MATCH step carrying the located substring, or a trailing FAIL step
//!    when every candidate is exhausted.
//!
//! Known scaling limit: candidate offsets are O(subject length) and each
//! attempt is O(pattern length x subject length) in the worst case (quantifier
//! scanning), so a full scan is O(pattern length x subject length^2). That is
//! acceptable for short, human-typed inputs, which is all this engine is for;
//! do not feed it documents.

pub mod atom;
pub mod matcher;

use crate::trace::{Trace, TraceStep};
use matcher::MatchOutcome;

/// Run the stepwise simulation of `pattern` against `subject`
///
/// Pure and stateless: identical inputs produce structurally identical traces.
/// The trace always ends in a MATCH step (with `final_match` set) or a FAIL
/// step.
pub fn trace_detailed(pattern: &str, subject: &str) -> Trace {
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let subject_chars: Vec<char> = subject.chars().collect();

    let mut trace = Trace::new();
    trace.push(TraceStep::info(
        "Core engaged. Scanning string for pattern signature...",
    ));

    let anchored = pattern_chars.first() == Some(&'^');
    let candidates: Vec<usize> = if anchored {
        vec![0]
    } else {
        (0..=subject_chars.len()).collect()
    };

    for start in candidates {
        trace.push(
            TraceStep::info(format!("Starting scan at string index {}.", start))
                .with_string_index(start),
        );

        let mut pattern_start = 0;
        if anchored {
            if start == 0 {
                trace.push(
                    TraceStep::matched("Anchor '^' matches start of string.")
                        .with_pattern_index(0)
                        .with_string_index(start),
                );
                pattern_start = 1;
            } else {
                trace.push(
                    TraceStep::failed(format!(
                        "Anchor '^' fails to match at string index {}.",
                        start
                    ))
                    .with_pattern_index(0)
                    .with_string_index(start),
                );
                continue;
            }
        }

        if let MatchOutcome::Matched { end } = matcher::try_match(
            &pattern_chars,
            &subject_chars,
            pattern_start,
            start,
            &mut trace,
        ) {
            let matched: String = subject_chars[start..end].iter().collect();
            trace.push(
                TraceStep::matched(format!("Pattern signature locked: {}", matched))
                    .with_string_index(start)
                    .with_final_match(matched.clone()),
            );
            return trace;
        }
    }

    trace.push(TraceStep::failed(
        "Scan complete. No matching signature found.",
    ));
    trace
}
