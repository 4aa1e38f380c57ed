//! Trace data model - the atomic units of match observability
//!
//! A [`Trace`] is an ordered, finite, replayable record of every decision the
//! matching engine made for one (pattern, subject) pair. It is produced fresh
//! on every request and never mutated afterwards; consumers (the CLI printer,
//! the TUI viewer, test harnesses) only iterate it.
//!
//! Each [`TraceStep`] serializes to the shape expected by consumers:
//!
//! ```text
//! { "kind": "MATCH", "text": "...", "patternIndex": 0, "stringIndex": 2, "finalMatch": "ab" }
//! ```
//!
//! `patternIndex` and `stringIndex` are *character* indices (both pattern and
//! subject are treated as ordered character sequences). `null` is the "not
//! applicable" sentinel, used by whole-scan steps that point at no particular
//! position.

use serde::{Deserialize, Serialize};

/// The kind of a trace step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepKind {
    /// Informational step (engine engaged, scan start, quantifier resolution)
    Info,
    /// A successful check: anchor, atom, quantifier repetition, or a located match
    Match,
    /// A failed check, or the terminal "nothing matched anywhere" step
    Fail,
}

/// One decision made by the engine, in human-readable and replayable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    /// What happened
    pub kind: StepKind,

    /// Human-readable rendering of the decision, reproducible verbatim from
    /// the inputs (atom text, matched character, anchor name, satisfied count)
    pub text: String,

    /// Character index into the pattern under evaluation, if applicable
    pub pattern_index: Option<usize>,

    /// Character index into the subject under evaluation, if applicable
    pub string_index: Option<usize>,

    /// The matched substring, present only on a completed, located match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_match: Option<String>,
}

impl TraceStep {
    /// Create a step with no position information
    pub fn new(kind: StepKind, text: impl Into<String>) -> Self {
        TraceStep {
            kind,
            text: text.into(),
            pattern_index: None,
            string_index: None,
            final_match: None,
        }
    }

    /// Shorthand for an INFO step
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StepKind::Info, text)
    }

    /// Shorthand for a MATCH step
    pub fn matched(text: impl Into<String>) -> Self {
        Self::new(StepKind::Match, text)
    }

    /// Shorthand for a FAIL step
    pub fn failed(text: impl Into<String>) -> Self {
        Self::new(StepKind::Fail, text)
    }

    /// Attach the pattern position this step refers to
    pub fn with_pattern_index(mut self, index: usize) -> Self {
        self.pattern_index = Some(index);
        self
    }

    /// Attach the subject position this step refers to
    pub fn with_string_index(mut self, index: usize) -> Self {
        self.string_index = Some(index);
        self
    }

    /// Attach the matched substring of a completed match
    pub fn with_final_match(mut self, text: impl Into<String>) -> Self {
        self.final_match = Some(text.into());
        self
    }
}

/// The ordered record of steps produced for one (pattern, subject) pair
///
/// Immutable once handed to a consumer. Non-empty whenever pattern and subject
/// are non-empty and the pattern was acceptable to the classifier: at minimum
/// it ends in one MATCH or FAIL step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Create an empty trace
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    /// Append a step (used by the generators while building)
    pub(crate) fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// All steps, in emission order
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// The step at a given position
    pub fn get(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last step, which carries the overall outcome
    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    /// Whether the trace ends in a located match
    pub fn found_match(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.final_match.is_some())
    }

    /// The located match substring, if any step carries one
    ///
    /// The detailed path produces at most one; the fallback path may produce
    /// several, in which case this returns the first.
    pub fn final_match(&self) -> Option<&str> {
        self.steps
            .iter()
            .find_map(|step| step.final_match.as_deref())
    }

    /// Iterate over the steps
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }
}

impl IntoIterator for Trace {
    type Item = TraceStep;
    type IntoIter = std::vec::IntoIter<TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
