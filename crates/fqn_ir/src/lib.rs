//! fqn IR - token-level representation of one PHP source file.
//!
//! This crate holds the data the qualifier rule reads:
//! - Spans for source locations
//! - `TokenKind` categories and `Token` records
//! - `TokenList` for ordered token storage
//! - `TokenStream`, pairing a token list with the source its spans index
//!
//! Tokens are produced by an external tokenizer and never mutated here.
//! Rewrites are expressed as replacement text keyed by token index (see
//! `fqn_lint::Fixer`).

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList, TokenStream};
