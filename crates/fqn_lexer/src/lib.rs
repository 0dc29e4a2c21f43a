//! Minimal PHP token source built on logos.
//!
//! Produces a [`TokenStream`] with the token categories the qualifier rule
//! distinguishes. It is not a complete PHP lexer: double-quoted strings
//! are single tokens (no interpolation parts) and `?>` inside a line
//! comment is not recognized as a close tag.

mod lex_error;
mod raw_token;

use fqn_ir::{Span, Token, TokenKind, TokenList, TokenStream};
use logos::Logos;

pub use lex_error::LexError;

use raw_token::RawToken;

/// Tokenize a PHP file.
///
/// Text outside `<?php ... ?>` becomes `InlineHtml`; unrecognized input
/// inside code becomes `Other`. Every byte of the source is covered by
/// exactly one token, in order.
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    let mut tokens = TokenList::with_capacity(source.len() / 4);
    let mut pos = 0;

    while pos < source.len() {
        let html = source.get(pos..).unwrap_or_default();
        let Some((tag_at, tag_len)) = find_open_tag(html) else {
            tokens.push(Token::new(
                TokenKind::InlineHtml,
                Span::try_from_range(pos..source.len())?,
            ));
            break;
        };

        if tag_at > 0 {
            tokens.push(Token::new(
                TokenKind::InlineHtml,
                Span::try_from_range(pos..pos + tag_at)?,
            ));
        }
        let tag_start = pos + tag_at;
        tokens.push(Token::new(
            TokenKind::OpenTag,
            Span::try_from_range(tag_start..tag_start + tag_len)?,
        ));

        pos = lex_code(source, tag_start + tag_len, &mut tokens)?;
    }

    Ok(TokenStream::new(source, tokens))
}

/// Lex PHP code from `start` until a close tag or the end of the file.
///
/// Returns the offset where inline HTML resumes.
fn lex_code(source: &str, start: usize, tokens: &mut TokenList) -> Result<usize, LexError> {
    let code = source.get(start..).unwrap_or_default();
    let mut lexer = RawToken::lexer(code);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::try_from_range(start + range.start..start + range.end)?;
        let kind = match result {
            Ok(raw) => convert_token(raw, lexer.slice()),
            Err(()) => TokenKind::Other,
        };
        tokens.push(Token::new(kind, span));

        if kind == TokenKind::CloseTag {
            return Ok(start + range.end);
        }
    }

    Ok(source.len())
}

/// Find the next `<?php` or `<?=` tag as `(offset, length)`.
///
/// `<?php` is case-insensitive and must be followed by whitespace or the
/// end of input.
fn find_open_tag(text: &str) -> Option<(usize, usize)> {
    for (at, _) in text.match_indices("<?") {
        let after = text.get(at + 2..).unwrap_or_default();
        if after.starts_with('=') {
            return Some((at, 3));
        }

        let is_php = after
            .get(..3)
            .is_some_and(|word| word.eq_ignore_ascii_case("php"));
        if is_php {
            let next = after.get(3..).and_then(|rest| rest.chars().next());
            if matches!(next, None | Some(' ' | '\t' | '\n' | '\r')) {
                return Some((at, 5));
            }
        }
    }
    None
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::LineComment | RawToken::HashComment => TokenKind::Comment,
        RawToken::BlockComment => {
            // `/**/` is an ordinary empty comment
            if slice.starts_with("/**") && slice.len() > 4 {
                TokenKind::DocComment
            } else {
                TokenKind::Comment
            }
        }
        RawToken::CloseTag => TokenKind::CloseTag,
        RawToken::Variable => TokenKind::Variable,
        RawToken::Ident => {
            TokenKind::keyword(&slice.to_ascii_lowercase()).unwrap_or(TokenKind::Ident)
        }
        RawToken::LNumber => TokenKind::LNumber,
        RawToken::DNumber => TokenKind::DNumber,
        RawToken::QuotedString | RawToken::Heredoc => TokenKind::ConstantString,
        RawToken::NsSeparator => TokenKind::NsSeparator,
        RawToken::ObjectOperator => TokenKind::ObjectOperator,
        RawToken::NullsafeObjectOperator => TokenKind::NullsafeObjectOperator,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::OpenParen => TokenKind::OpenParen,
        RawToken::CloseParen => TokenKind::CloseParen,
        RawToken::OpenBrace => TokenKind::OpenBrace,
        RawToken::CloseBrace => TokenKind::CloseBrace,
        RawToken::OpenBracket => TokenKind::OpenBracket,
        RawToken::CloseBracket => TokenKind::CloseBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Ampersand => TokenKind::Ampersand,
        RawToken::AttributeStart | RawToken::Punct => TokenKind::Other,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
