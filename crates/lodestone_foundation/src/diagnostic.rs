//! Diagnostics and the ordered reporter.
//!
//! A `Reporter` accumulates diagnostics in insertion order. Speculative
//! parses write into a sandboxed reporter which is either absorbed into
//! the live one (commit) or dropped (rollback); the live reporter is
//! never touched until a winner is chosen.

use crate::range::Range;

/// How severe a diagnostic is.
///
/// Severity is a policy signal for the consumer, never control flow
/// inside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// The input is wrong.
    Error,
    /// The input is suspect.
    Warning,
    /// Informational, e.g. a degraded-analysis note.
    Hint,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

/// One reported problem, located by range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// The text this diagnostic covers.
    pub range: Range,
    /// Human-readable message, already localized.
    pub message: String,
    /// Severity of the problem.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(range: Range, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            range,
            message: message.into(),
            severity,
        }
    }
}

/// An ordered, appendable list of diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Reports an error covering the given range.
    pub fn error(&mut self, message: impl Into<String>, range: Range) {
        self.push(Diagnostic::new(range, message, Severity::Error));
    }

    /// Reports a warning covering the given range.
    pub fn warning(&mut self, message: impl Into<String>, range: Range) {
        self.push(Diagnostic::new(range, message, Severity::Warning));
    }

    /// Reports a hint covering the given range.
    pub fn hint(&mut self, message: impl Into<String>, range: Range) {
        self.push(Diagnostic::new(range, message, Severity::Hint));
    }

    /// Moves every diagnostic out of another reporter into this one,
    /// preserving their order after the existing entries.
    pub fn absorb(&mut self, other: Reporter) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Returns the diagnostics in insertion order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the reporter and returns its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Returns the total width of all diagnostics, the ambiguity
    /// ranking signal: the sum of `end - start` over every entry.
    #[must_use]
    pub fn total_width(&self) -> usize {
        self.diagnostics.iter().map(|d| d.range.len()).sum()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if no diagnostics have been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
