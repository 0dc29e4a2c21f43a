//! Token types for PHP token streams.

mod kind;
mod list;
mod stream;

pub use kind::TokenKind;
pub use list::TokenList;
pub use stream::TokenStream;

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a token without a source location, for hand-built streams.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

// Token is allocated once per lexeme; keep it compact.
// TokenKind (1 byte, padded to 4) + Span (8 bytes) = 12 bytes
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(Token, 12);
    crate::static_assert_size!(TokenKind, 1);
}

#[cfg(test)]
mod tests;
