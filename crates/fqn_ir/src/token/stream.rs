//! A token list paired with the source text its spans point into.

use super::{Token, TokenKind, TokenList};

/// All tokens of one file plus the file's source.
///
/// Owned by the token source (the host tokenizer); rule code only borrows it
/// for the duration of a pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    source: String,
    tokens: TokenList,
}

impl TokenStream {
    pub fn new(source: impl Into<String>, tokens: TokenList) -> Self {
        TokenStream {
            source: source.into(),
            tokens,
        }
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.kind(index)
    }

    /// Text of the token at `index`, or `None` past the end.
    ///
    /// A span that does not land on char boundaries of the source yields
    /// `None` rather than panicking.
    pub fn text(&self, index: usize) -> Option<&str> {
        let token = self.tokens.get(index)?;
        self.source.get(token.span.to_range())
    }

    /// Indices of every token of the given kind, in stream order.
    pub fn positions_of(&self, kind: TokenKind) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .kinds()
            .iter()
            .enumerate()
            .filter(move |(_, k)| **k == kind)
            .map(|(i, _)| i)
    }
}
