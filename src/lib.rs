//! # retrace
//!
//! A step-by-step tracer for a simplified regex matching engine.
//!
//! The core of the crate is the stepwise match tracer: a hand-built,
//! non-backtracking matcher that walks a pattern and a subject string in
//! lock-step and records every decision it makes (anchor checks, literal and
//! shorthand-class tests, quantifier resolution, the located match or the
//! exhaustive failure) as an ordered, replayable [`Trace`].
//!
//! Patterns outside the simulated subset - groups, lookarounds, class ranges,
//! bounded repetition - are detected by a coarse [`classifier`] heuristic and
//! routed to a [`fallback`] enumerator that reports only whole matches, using
//! the `regex` crate as an opaque host engine.
//!
//! ## Entry points
//!
//! - [`is_complex`] - decide which path a pattern takes
//! - [`trace_detailed`] - the stepwise simulation (simple patterns)
//! - [`trace_complex`] - the match-only enumeration (complex patterns)
//! - [`trace`] - convenience router over the three
//!
//! Presentation (step cursors, pointers, highlighting, auto-play) lives with
//! consumers; [`TraceCursor`] is the value object they drive. The generators
//! are pure: same inputs, same trace, no shared state.

pub mod catalog;
pub mod classifier;
pub mod cursor;
pub mod engine;
pub mod fallback;
pub mod trace;

pub use classifier::is_complex;
pub use cursor::TraceCursor;
pub use engine::trace_detailed;
pub use fallback::trace_complex;
pub use trace::{StepKind, Trace, TraceStep};

/// Trace a pattern against a subject, routing by complexity
///
/// Applies [`is_complex`] and dispatches to [`trace_detailed`] or
/// [`trace_complex`]. Callers that need to know which path was taken should
/// call the classifier themselves.
pub fn trace(pattern: &str, subject: &str) -> Trace {
    if is_complex(pattern) {
        trace_complex(pattern, subject)
    } else {
        trace_detailed(pattern, subject)
    }
}
