//! Nearest non-trivia neighbors of a token.
//!
//! Whitespace and comments never decide classification, so the rule always
//! looks past them to the closest significant token on either side.

use fqn_ir::TokenStream;

/// Index of the closest token before `pos` that is not trivia.
///
/// `pos` itself is excluded. `None` at the start of the stream.
pub fn find_prev_non_trivial(stream: &TokenStream, pos: usize) -> Option<usize> {
    let kinds = stream.tokens().kinds();
    let end = pos.min(kinds.len());
    kinds[..end].iter().rposition(|kind| !kind.is_trivia())
}

/// Index of the closest token after `pos` that is not trivia.
///
/// `pos` itself is excluded. `None` at the end of the stream.
pub fn find_next_non_trivial(stream: &TokenStream, pos: usize) -> Option<usize> {
    let start = pos.checked_add(1)?;
    let rest = stream.tokens().kinds().get(start..)?;
    rest.iter()
        .position(|kind| !kind.is_trivia())
        .map(|offset| start + offset)
}
