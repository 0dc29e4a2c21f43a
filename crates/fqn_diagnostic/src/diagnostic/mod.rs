//! Core diagnostic types for structured violation reporting.

use fqn_ir::Span;

use crate::ErrorCode;

/// A replacement that resolves a violation, safe to apply without review.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// The span to replace.
    pub span: Span,
    /// The replacement text.
    pub snippet: String,
}

/// A rule violation with its location and fix.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Location of the violating token.
    pub span: Span,
    /// Short text shown at `span`.
    pub label: String,
    pub fix: Option<Suggestion>,
}

impl Diagnostic {
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: Span::DUMMY,
            label: String::new(),
            fix: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at the violation location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.span = span;
        self.label = message.into();
        self
    }

    /// Attach a fix replacing `span` with `snippet`.
    pub fn with_fix(
        mut self,
        message: impl Into<String>,
        span: Span,
        snippet: impl Into<String>,
    ) -> Self {
        self.fix = Some(Suggestion {
            message: message.into(),
            span,
            snippet: snippet.into(),
        });
        self
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}
