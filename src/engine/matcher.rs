//! Single-pass matcher - consumes pattern tokens left to right
//!
//! The matcher is a small state machine over a (pattern_index, string_index)
//! pair. Each loop iteration handles exactly one of, in priority order:
//!
//! 1. the `$` end anchor,
//! 2. an atom bound to a quantifier (`*`, `+`, `?`), resolved greedily,
//! 3. a plain atom.
//!
//! Quantifiers are resolved **without backtracking**: once the greedy run has
//! consumed its repetitions, later tokens never reclaim them. `a*a` therefore
//! fails against `"aaa"` even though a real regex engine would match. This
//! divergence is the point - the trace shows this engine's actual, limited
//! decision procedure - and is locked by tests; do not "fix" it.
//!
//! Every iteration advances the pattern index (and the subject index for each
//! consumed character), and both sequences are finite, so the walk terminates.

use crate::engine::atom::{Atom, Quantifier};
use crate::trace::{Trace, TraceStep};

/// Outcome of one match attempt from a candidate offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The whole pattern was consumed; `end` is the subject index reached
    Matched { end: usize },
    /// A token check failed at the given pattern/subject indices
    Failed {
        pattern_index: usize,
        string_index: usize,
    },
}

impl MatchOutcome {
    /// Whether this outcome is a full-pattern match
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// Walk the pattern against the subject from the given index pair
///
/// Emits one step per decision into `trace`. Returns as soon as a check fails;
/// succeeds when the pattern index reaches the end of the pattern.
pub fn try_match(
    pattern: &[char],
    subject: &[char],
    pattern_start: usize,
    subject_start: usize,
    trace: &mut Trace,
) -> MatchOutcome {
    let mut rp = pattern_start;
    let mut sp = subject_start;

    while rp < pattern.len() {
        // End anchor takes priority over everything, including a following
        // quantifier character.
        if pattern[rp] == '$' {
            if sp == subject.len() {
                trace.push(
                    TraceStep::matched("Anchor '$' matches end of string.")
                        .with_pattern_index(rp)
                        .with_string_index(sp),
                );
                rp += 1;
                continue;
            } else {
                trace.push(
                    TraceStep::failed(format!("Anchor '$' fails to match at string index {}.", sp))
                        .with_pattern_index(rp)
                        .with_string_index(sp),
                );
                return MatchOutcome::Failed {
                    pattern_index: rp,
                    string_index: sp,
                };
            }
        }

        let (atom, atom_len) = Atom::scan(pattern, rp);
        let quantifier = pattern
            .get(rp + atom_len)
            .copied()
            .and_then(Quantifier::from_char);

        if let Some(quantifier) = quantifier {
            match run_quantifier(atom, quantifier, subject, rp, rp + atom_len, sp, trace) {
                Some(consumed) => {
                    rp += atom_len + 1;
                    sp += consumed;
                }
                None => {
                    return MatchOutcome::Failed {
                        pattern_index: rp,
                        string_index: sp,
                    };
                }
            }
            continue;
        }

        let ch = subject.get(sp).copied();
        if let Some(ch) = ch.filter(|&c| atom.matches(Some(c))) {
            trace.push(
                TraceStep::matched(format!("Token '{}' matches '{}'", atom, ch))
                    .with_pattern_index(rp)
                    .with_string_index(sp),
            );
            rp += atom_len;
            sp += 1;
        } else {
            let rendered = ch
                .map(|c| c.to_string())
                .unwrap_or_else(|| "end of string".to_string());
            trace.push(
                TraceStep::failed(format!("Token '{}' failed to match '{}'", atom, rendered))
                    .with_pattern_index(rp)
                    .with_string_index(sp),
            );
            return MatchOutcome::Failed {
                pattern_index: rp,
                string_index: sp,
            };
        }
    }

    MatchOutcome::Matched { end: sp }
}

/// Resolve one quantified atom greedily, with no backtracking
///
/// Emits one MATCH step per satisfied repetition and either an INFO step with
/// the satisfied count (returning the number of characters consumed) or a FAIL
/// step when the lower bound is not met (returning `None`).
fn run_quantifier(
    atom: Atom,
    quantifier: Quantifier,
    subject: &[char],
    rp: usize,
    quantifier_index: usize,
    sp: usize,
    trace: &mut Trace,
) -> Option<usize> {
    let mut count = 0;
    let mut cursor = sp;

    loop {
        if let Some(max) = quantifier.max() {
            if count >= max {
                break;
            }
        }
        let Some(ch) = subject
            .get(cursor)
            .copied()
            .filter(|&c| atom.matches(Some(c)))
        else {
            break;
        };
        trace.push(
            TraceStep::matched(format!("Token '{}' matches '{}'", atom, ch))
                .with_pattern_index(rp)
                .with_string_index(cursor),
        );
        cursor += 1;
        count += 1;
    }

    if count >= quantifier.min() {
        trace.push(
            TraceStep::info(format!(
                "Quantifier '{}' satisfied with {} matches.",
                quantifier.symbol(),
                count
            ))
            .with_pattern_index(quantifier_index)
            .with_string_index(cursor),
        );
        Some(count)
    } else {
        trace.push(
            TraceStep::failed(format!(
                "Token '{}{}' failed to satisfy minimum of {} matches.",
                atom,
                quantifier.symbol(),
                quantifier.min()
            ))
            .with_pattern_index(rp)
            .with_string_index(sp),
        );
        None
    }
}
