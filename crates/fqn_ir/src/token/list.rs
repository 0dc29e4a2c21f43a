//! Ordered token storage.

use std::fmt;

use super::{Token, TokenKind};

/// A list of tokens for one file, indexed `0..len()`.
///
/// Includes a parallel `kinds` array so neighbor scans only touch one byte
/// per token instead of the full `Token`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `kinds[i] == tokens[i].kind` for all `i`.
    kinds: Vec<TokenKind>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            kinds: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            kinds: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let kinds = tokens.iter().map(|t| t.kind).collect();
        TokenList { tokens, kinds }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.kinds.push(token.kind);
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get the kind at the given position, `None` past the end.
    #[inline]
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.kinds.get(index).copied()
    }

    /// The dense kinds slice.
    #[inline]
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
