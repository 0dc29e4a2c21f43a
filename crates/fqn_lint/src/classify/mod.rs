//! Call-site classification.
//!
//! Decides whether an identifier token is an unqualified call to a
//! registry function. Rules run in a fixed order and the first exclusion
//! wins; the resulting [`CallSite`] names the rule that decided.

use fqn_ir::{TokenKind, TokenStream};

use crate::builtins::BuiltinRegistry;
use crate::context::{find_next_non_trivial, find_prev_non_trivial};

/// Outcome of classifying one token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallSite {
    /// The position does not hold an identifier.
    NotIdentifier,
    /// Preceded by `\`: already fully qualified.
    AlreadyQualified,
    /// The previous significant token rules out a global call
    /// (`->`, `::`, `function`, `new`, ...).
    ExcludedByPrevious(TokenKind),
    /// The next significant token rules out a global call.
    ExcludedByNext(TokenKind),
    /// Not followed by `(`: a constant or other bare reference.
    NotACall,
    /// A call, but not to a function in the registry.
    NotBuiltin,
    /// An unqualified call to a registry function.
    GlobalCall {
        /// Lowercased function name.
        name: String,
    },
}

impl CallSite {
    pub fn is_global_call(&self) -> bool {
        matches!(self, CallSite::GlobalCall { .. })
    }
}

/// Token kinds next to which an identifier cannot be a global function call.
pub fn is_excluded_neighbor(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::DoubleColon
            | TokenKind::ObjectOperator
            | TokenKind::NullsafeObjectOperator
            | TokenKind::Function
            | TokenKind::Const
            | TokenKind::Public
            | TokenKind::Private
            | TokenKind::Protected
            | TokenKind::As
            | TokenKind::New
            | TokenKind::Insteadof
            | TokenKind::NsSeparator
            | TokenKind::Implements
    )
}

/// Classify the token at `position`.
///
/// Missing neighbors at the stream edges never match an exclusion; an
/// identifier with no following token is simply not a call.
pub fn classify(stream: &TokenStream, position: usize, registry: &BuiltinRegistry) -> CallSite {
    if stream.kind(position) != Some(TokenKind::Ident) {
        return CallSite::NotIdentifier;
    }
    let Some(text) = stream.text(position) else {
        return CallSite::NotIdentifier;
    };

    let prev_index = find_prev_non_trivial(stream, position);
    let prev = prev_index.and_then(|i| stream.kind(i));
    let next = find_next_non_trivial(stream, position).and_then(|i| stream.kind(i));

    // `\` is also an excluded neighbor; qualification is reported first
    if prev == Some(TokenKind::NsSeparator) {
        return CallSite::AlreadyQualified;
    }
    if prev == Some(TokenKind::Ampersand) && declares_by_reference(stream, prev_index) {
        return CallSite::ExcludedByPrevious(TokenKind::Function);
    }
    if let Some(kind) = prev.filter(|&k| is_excluded_neighbor(k)) {
        return CallSite::ExcludedByPrevious(kind);
    }
    if let Some(kind) = next.filter(|&k| is_excluded_neighbor(k)) {
        return CallSite::ExcludedByNext(kind);
    }
    if next != Some(TokenKind::OpenParen) {
        return CallSite::NotACall;
    }

    let name = text.to_ascii_lowercase();
    if !registry.contains(&name) {
        return CallSite::NotBuiltin;
    }
    CallSite::GlobalCall { name }
}

/// Whether the `&` at `ampersand` follows `function`, as in
/// `function &name()`.
fn declares_by_reference(stream: &TokenStream, ampersand: Option<usize>) -> bool {
    ampersand
        .and_then(|i| find_prev_non_trivial(stream, i))
        .and_then(|i| stream.kind(i))
        == Some(TokenKind::Function)
}
