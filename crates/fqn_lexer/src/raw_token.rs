//! Raw Token Definition
//!
//! The logos-derived tokenizer for the code between `<?php` and `?>`.
//! Inline HTML and open tags are handled by the driver in `lib.rs`.

use logos::{Lexer, Logos};

/// Raw token from logos, before keyword mapping.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    // `#[` opens an attribute, so the first comment char may not be `[`
    #[regex(r"#([^\[\n][^\n]*)?")]
    HashComment,

    #[token("#[")]
    AttributeStart,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("?>")]
    CloseTag,

    #[regex(r"\$[a-zA-Z_\u{80}-\u{10FFFF}][a-zA-Z0-9_\u{80}-\u{10FFFF}]*")]
    Variable,

    #[regex(r"[a-zA-Z_\u{80}-\u{10FFFF}][a-zA-Z0-9_\u{80}-\u{10FFFF}]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    LNumber,

    #[regex(r"([0-9][0-9_]*)?\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*\.([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    DNumber,

    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    QuotedString,

    #[regex(
        r#"<<<[ \t]*("[a-zA-Z_][a-zA-Z0-9_]*"|'[a-zA-Z_][a-zA-Z0-9_]*'|[a-zA-Z_][a-zA-Z0-9_]*)\r?\n"#,
        heredoc_body
    )]
    Heredoc,

    #[token("\\")]
    NsSeparator,
    #[token("->")]
    ObjectOperator,
    #[token("?->")]
    NullsafeObjectOperator,
    #[token("::")]
    DoubleColon,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("&")]
    Ampersand,

    // Every other operator, one character at a time; `&&` and `&=`
    // stay whole so they never read as a by-reference `&`
    #[token("&&")]
    #[token("&=")]
    #[regex(r"[-+*/%=<>!|^~.?:@$`]")]
    Punct,
}

/// Consume a block comment body through its closing `*/`.
///
/// An unterminated comment runs to the end of the input and is reported
/// as a lex error.
fn block_comment(lex: &mut Lexer<RawToken>) -> bool {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

/// Consume a heredoc or nowdoc body up to and including its closing label.
///
/// The closing label may be indented and must not be followed by a
/// name character. Returns `false` (a lex error) when the label never
/// closes.
fn heredoc_body(lex: &mut Lexer<RawToken>) -> bool {
    let label = lex
        .slice()
        .trim_start_matches('<')
        .trim()
        .trim_matches(|c| c == '\'' || c == '"');
    let rest = lex.remainder();

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let body = line.trim_start_matches([' ', '\t']);
        if let Some(after) = body.strip_prefix(label) {
            let continues_name = after
                .chars()
                .next()
                .is_some_and(|c| c == '_' || c.is_alphanumeric());
            if !continues_name {
                let consumed = offset + (line.len() - body.len()) + label.len();
                lex.bump(consumed);
                return true;
            }
        }
        offset += line.len();
    }
    false
}
