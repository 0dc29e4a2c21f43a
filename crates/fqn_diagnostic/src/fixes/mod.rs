//! Source edits for token replacements.
//!
//! A fix pass records one [`TextEdit`] per replaced token and applies them
//! all in one pass over the source.

use fqn_ir::Span;

/// A single text edit: replace `span` with `new_text`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: text.into(),
        }
    }
}

/// Two edits touch overlapping ranges, or an edit falls outside the source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("edits at {first} and {second} overlap")]
    Overlap { first: Span, second: Span },
    #[error("edit at {span} is outside a source of {len} bytes")]
    OutOfBounds { span: Span, len: usize },
}

/// Apply edits to `source`, returning the edited text.
///
/// Edits may arrive in any order; they are sorted by start offset. Two edits
/// that overlap are rejected instead of guessing which one wins.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|e| (e.span.start, e.span.end));

    for pair in sorted.windows(2) {
        if pair[1].span.start < pair[0].span.end {
            return Err(EditError::Overlap {
                first: pair[0].span,
                second: pair[1].span,
            });
        }
    }

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for edit in sorted {
        let range = edit.span.to_range();
        let (Some(before), true) = (source.get(cursor..range.start), range.end <= source.len())
        else {
            return Err(EditError::OutOfBounds {
                span: edit.span,
                len: source.len(),
            });
        };
        out.push_str(before);
        out.push_str(&edit.new_text);
        cursor = range.end;
    }
    out.push_str(source.get(cursor..).unwrap_or_default());
    Ok(out)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
