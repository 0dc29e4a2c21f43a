//! The qualifier rule.
//!
//! A [`QualifierChecker`] owns the per-file state of one pass: the active
//! registry, the resolved `onlyOptimizedFunctions` switch, and the position
//! of the violation currently being reported. The host feeds it identifier
//! positions one at a time through [`QualifierChecker::process`], or hands
//! it a whole stream via [`QualifierChecker::check_file`].

use fqn_diagnostic::{Diagnostic, ErrorCode};
use fqn_ir::{TokenKind, TokenStream};

use crate::builtins::{BuiltinRegistry, BuiltinSource, BundledBuiltins, RegistryMode};
use crate::classify::{classify, CallSite};
use crate::config::{OptimizedOnly, PropertySource};
use crate::fixer::{
    compute_fix, CollectingSink, DiagnosticSink, FixError, FixMode, Fixer, TokenRewriter,
    Violation,
};

/// Message reported for an unqualified call to `name` (lowercased).
pub fn violation_message(name: &str) -> String {
    format!("Function {name}() should be referenced via a fully qualified name, e.g.: \\{name}()")
}

/// Result of checking one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub violations: Vec<Violation>,
    /// Source with fixes applied; `Some` only in [`FixMode::Fix`].
    pub fixed_source: Option<String>,
}

impl FileReport {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.violations.iter().map(|v| &v.diagnostic)
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Flags calls to global functions that are not written fully qualified.
///
/// One checker serves one file at a time; call [`reset`](Self::reset)
/// (or use [`check_file`](Self::check_file), which resets) before the next.
#[derive(Clone, Debug)]
pub struct QualifierChecker {
    full: BuiltinRegistry,
    optimized: BuiltinRegistry,
    mode: RegistryMode,
    flag: OptimizedOnly,
    /// Position of the violation being reported; only valid between the
    /// report and its fix.
    reported_at: Option<usize>,
}

impl Default for QualifierChecker {
    fn default() -> Self {
        Self::new(&BundledBuiltins)
    }
}

impl QualifierChecker {
    pub fn new(builtins: &dyn BuiltinSource) -> Self {
        QualifierChecker {
            full: BuiltinRegistry::full(builtins),
            optimized: BuiltinRegistry::optimized(),
            mode: RegistryMode::Full,
            flag: OptimizedOnly::Unset,
            reported_at: None,
        }
    }

    /// The registry membership tests currently run against.
    pub fn registry(&self) -> &BuiltinRegistry {
        match self.mode {
            RegistryMode::Full => &self.full,
            RegistryMode::Optimized => &self.optimized,
        }
    }

    pub fn flag(&self) -> OptimizedOnly {
        self.flag
    }

    /// Forget all per-file state.
    pub fn reset(&mut self) {
        self.mode = RegistryMode::Full;
        self.flag = OptimizedOnly::Unset;
        self.reported_at = None;
    }

    /// Resolve the switch unless an earlier call already found a value,
    /// and swap to the optimized registry when it is on.
    fn resolve_flag(&mut self, properties: &dyn PropertySource) {
        if !self.flag.is_set() {
            self.flag = OptimizedOnly::resolve(properties);
            tracing::debug!(flag = ?self.flag, "resolved onlyOptimizedFunctions");
        }
        if self.flag.is_true() && self.mode != RegistryMode::Optimized {
            self.mode = RegistryMode::Optimized;
            tracing::debug!("switched to the optimized function registry");
        }
    }

    /// Check the token at `position`, reporting to `sink` and fixing through
    /// `rewriter` when the sink asks for it.
    ///
    /// Returns how the token was classified.
    #[tracing::instrument(level = "trace", skip(self, stream, properties, sink, rewriter))]
    pub fn process(
        &mut self,
        stream: &TokenStream,
        position: usize,
        properties: &dyn PropertySource,
        sink: &mut dyn DiagnosticSink,
        rewriter: &mut dyn TokenRewriter,
    ) -> Result<CallSite, FixError> {
        self.resolve_flag(properties);

        let site = classify(stream, position, self.registry());
        let CallSite::GlobalCall { name } = &site else {
            tracing::trace!(?site, "skipped");
            return Ok(site);
        };

        let (Some(token), Some(original)) = (stream.get(position), stream.text(position)) else {
            return Ok(site);
        };
        let replacement = compute_fix(original);
        let diagnostic = Diagnostic::new(ErrorCode::W0001)
            .with_message(violation_message(name))
            .with_label(token.span, "unqualified call to a global function")
            .with_fix(
                format!("qualify as `{replacement}`"),
                token.span,
                replacement.as_str(),
            );

        tracing::debug!(position, function = %name, span = %token.span, "violation");
        self.reported_at = Some(position);
        let wants_fix = sink.add_fixable_violation(diagnostic, position);
        let result = if wants_fix {
            self.apply_fix(rewriter, &replacement)
        } else {
            Ok(())
        };
        self.reported_at = None;
        result.map(|()| site)
    }

    /// Rewrite the token of the violation being reported.
    fn apply_fix(
        &mut self,
        rewriter: &mut dyn TokenRewriter,
        replacement: &str,
    ) -> Result<(), FixError> {
        let Some(position) = self.reported_at else {
            return Ok(());
        };
        rewriter.replace_token(position, replacement)?;
        tracing::debug!(position, %replacement, "fixed");
        Ok(())
    }

    /// Run the rule over every identifier of `stream`.
    ///
    /// Resets per-file state first, so one checker can be reused across
    /// files sequentially.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = stream.len(), ?mode))]
    pub fn check_file(
        &mut self,
        stream: &TokenStream,
        properties: &dyn PropertySource,
        mode: FixMode,
    ) -> Result<FileReport, FixError> {
        self.reset();
        let mut sink = CollectingSink::new(mode);
        let mut fixer = Fixer::new(stream);

        for position in stream.positions_of(TokenKind::Ident) {
            self.process(stream, position, properties, &mut sink, &mut fixer)?;
        }

        let fixed_source = match mode {
            FixMode::Report => None,
            FixMode::Fix => Some(fixer.render()?),
        };
        let violations = sink.into_violations();
        tracing::debug!(violations = violations.len(), fixes = fixer.len(), "file checked");

        Ok(FileReport {
            violations,
            fixed_source,
        })
    }
}
