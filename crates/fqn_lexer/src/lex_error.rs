//! Lexer error types.

use fqn_ir::SpanError;

/// Failure to produce a token stream.
///
/// Unrecognized input never fails the lexer; it becomes an `Other` token.
/// The only hard failure is a file too large for 32-bit spans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("source file too large to tokenize: {0}")]
    TooLarge(#[from] SpanError),
}
