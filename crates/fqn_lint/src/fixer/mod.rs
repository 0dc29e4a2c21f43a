//! Fix computation and token rewriting.
//!
//! The replacement text is computed by the pure [`compute_fix`]; applying it
//! goes through a [`TokenRewriter`], which the host may back with its own
//! fixer. [`Fixer`] is the in-crate rewriter over one [`TokenStream`].

use fqn_diagnostic::fixes::{apply_edits, EditError, TextEdit};
use fqn_diagnostic::Diagnostic;
use fqn_ir::TokenStream;
use rustc_hash::FxHashMap;

/// Failure to record or apply a token replacement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixError {
    #[error("token {position} is out of range for a stream of {len} tokens")]
    OutOfRange { position: usize, len: usize },
    #[error("token {position} was already replaced in this pass")]
    AlreadyReplaced { position: usize },
    #[error("cannot render fixed source: {0}")]
    Edit(#[from] EditError),
}

/// Fully-qualified form of an identifier. Case is kept as written.
pub fn compute_fix(original: &str) -> String {
    format!("\\{original}")
}

/// Receiver of in-place token text replacements.
pub trait TokenRewriter {
    fn replace_token(&mut self, position: usize, new_text: &str) -> Result<(), FixError>;
}

/// Receiver of violations.
///
/// Returns whether the host wants the violation fixed.
pub trait DiagnosticSink {
    fn add_fixable_violation(&mut self, diagnostic: Diagnostic, position: usize) -> bool;
}

/// Whether a run only reports or also fixes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FixMode {
    #[default]
    Report,
    Fix,
}

/// A reported violation and the token it was reported at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub position: usize,
    pub diagnostic: Diagnostic,
}

/// Sink that keeps every violation and accepts fixes in [`FixMode::Fix`].
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    mode: FixMode,
    violations: Vec<Violation>,
}

impl CollectingSink {
    pub fn new(mode: FixMode) -> Self {
        CollectingSink {
            mode,
            violations: Vec::new(),
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl DiagnosticSink for CollectingSink {
    fn add_fixable_violation(&mut self, diagnostic: Diagnostic, position: usize) -> bool {
        self.violations.push(Violation {
            position,
            diagnostic,
        });
        self.mode == FixMode::Fix
    }
}

/// Token-level replacement table over one stream.
///
/// Each token can be replaced at most once per pass.
#[derive(Clone, Debug)]
pub struct Fixer<'s> {
    stream: &'s TokenStream,
    replacements: FxHashMap<usize, String>,
}

impl<'s> Fixer<'s> {
    pub fn new(stream: &'s TokenStream) -> Self {
        Fixer {
            stream,
            replacements: FxHashMap::default(),
        }
    }

    pub fn replacement(&self, position: usize) -> Option<&str> {
        self.replacements.get(&position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Source edits for the recorded replacements, in token order.
    pub fn edits(&self) -> Vec<TextEdit> {
        let mut positions: Vec<usize> = self.replacements.keys().copied().collect();
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|position| {
                let token = self.stream.get(position)?;
                let text = self.replacements.get(&position)?;
                Some(TextEdit::replace(token.span, text.as_str()))
            })
            .collect()
    }

    /// The stream's source with every replacement applied.
    pub fn render(&self) -> Result<String, FixError> {
        Ok(apply_edits(self.stream.source(), &self.edits())?)
    }
}

impl TokenRewriter for Fixer<'_> {
    fn replace_token(&mut self, position: usize, new_text: &str) -> Result<(), FixError> {
        let len = self.stream.len();
        if position >= len {
            return Err(FixError::OutOfRange { position, len });
        }
        if self.replacements.contains_key(&position) {
            return Err(FixError::AlreadyReplaced { position });
        }
        self.replacements.insert(position, new_text.to_string());
        Ok(())
    }
}
