//! Step cursor - replay state owned by the presentation layer
//!
//! The generators produce an immutable [`Trace`]; replaying it one step at a
//! time is a presentation concern. [`TraceCursor`] is the explicit value
//! object for that: it owns a trace and a clamped position, and the viewer
//! (or any other consumer) drives it forward, backward, or back to the start.
//! Auto-advance timing stays in the consumer's event loop; the cursor itself
//! has no notion of time.

use crate::trace::{Trace, TraceStep};

/// A position within a trace, for one-step-at-a-time replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceCursor {
    trace: Trace,
    position: usize,
}

impl TraceCursor {
    /// Create a cursor positioned at the first step
    pub fn new(trace: Trace) -> Self {
        TraceCursor { trace, position: 0 }
    }

    /// The underlying trace
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Current position (0-based step index)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Whether the trace has no steps at all
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// The step under the cursor
    pub fn current(&self) -> Option<&TraceStep> {
        self.trace.get(self.position)
    }

    /// The steps from the start through the cursor, for log rendering
    pub fn visible(&self) -> &[TraceStep] {
        let end = (self.position + 1).min(self.trace.len());
        &self.trace.steps()[..end]
    }

    /// Whether the cursor sits on the last step
    pub fn at_end(&self) -> bool {
        self.trace.is_empty() || self.position + 1 >= self.trace.len()
    }

    /// Move one step forward; returns whether the position changed
    pub fn advance(&mut self) -> bool {
        if self.at_end() {
            false
        } else {
            self.position += 1;
            true
        }
    }

    /// Move one step backward; returns whether the position changed
    pub fn retreat(&mut self) -> bool {
        if self.position == 0 {
            false
        } else {
            self.position -= 1;
            true
        }
    }

    /// Jump to a position, clamped to the trace bounds
    pub fn jump_to(&mut self, position: usize) {
        self.position = position.min(self.trace.len().saturating_sub(1));
    }

    /// Return to the first step
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
