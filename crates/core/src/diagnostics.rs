//! Non-fatal issues found while generating.
//!
//! A diagnostic is logged, counted and kept; generation continues and the
//! output is unaffected. The count is reported once the run succeeds.

use std::fmt;

use tracing::warn;

/// What kind of non-fatal problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A property name contains whitespace.
    PropertyNameWhitespace,
    /// A property name is not made of `a-z`, `0-9` and `_` only.
    PropertyNameConvention,
    /// A response other than 303/500 has no resolvable type.
    MissingResponseType,
    /// An operation has neither a success response nor a 303 fallback.
    MissingOkResponse,
}

impl DiagnosticKind {
    /// Stable kebab-case label used in logs and the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::PropertyNameWhitespace => "property-name-whitespace",
            DiagnosticKind::PropertyNameConvention => "property-name-convention",
            DiagnosticKind::MissingResponseType => "missing-response-type",
            DiagnosticKind::MissingOkResponse => "missing-ok-response",
        }
    }
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Human-readable text naming the offending item.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

/// Ordered collection of diagnostics raised during one run.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic.
    pub fn raise(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        warn!(kind = kind.as_str(), "{message}");
        self.entries.push(Diagnostic { kind, message });
    }

    /// Total number raised.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was raised.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number raised of one kind.
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Diagnostics in the order they were raised.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}
