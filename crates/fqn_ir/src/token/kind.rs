//! Token kinds for PHP source.

use std::fmt;

/// Lexical category of a PHP token.
///
/// Only the categories the qualifier rule distinguishes get their own
/// variant; every other operator or punctuation character is `Other`.
/// Text is never stored here, it is sliced from the source by span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Trivia
    /// Spaces, tabs, newlines
    Whitespace,
    /// `// ...`, `# ...`, `/* ... */`
    Comment,
    /// `/** ... */`
    DocComment,

    // Markup
    /// `<?php`, `<?=`
    OpenTag,
    /// `?>`
    CloseTag,
    /// Text outside of PHP tags
    InlineHtml,

    // Names and literals
    /// Bare identifier (`T_STRING`): function, class, and constant names
    Ident,
    /// `$name`
    Variable,
    /// Integer literal
    LNumber,
    /// Float literal
    DNumber,
    /// Quoted string literal
    ConstantString,

    // Keywords the rule inspects
    Function,
    Const,
    Public,
    Private,
    Protected,
    As,
    New,
    Insteadof,
    Implements,

    // Other keywords
    Namespace,
    Use,
    Class,
    Interface,
    Trait,
    Extends,
    Static,
    Return,
    Echo,

    // Operators the rule inspects
    /// `\`
    NsSeparator,
    /// `->`
    ObjectOperator,
    /// `?->`
    NullsafeObjectOperator,
    /// `::`
    DoubleColon,
    /// `(`
    OpenParen,

    // Other punctuation
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `&`, by-reference marker or bitwise and
    Ampersand,
    /// Any other operator or punctuation character
    Other,
}

impl TokenKind {
    /// Whitespace and comments, skipped when locating contextual neighbors.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Map a lowercased word to its keyword kind.
    ///
    /// PHP keywords are case-insensitive, so callers lowercase first.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "function" => TokenKind::Function,
            "const" => TokenKind::Const,
            "public" => TokenKind::Public,
            "private" => TokenKind::Private,
            "protected" => TokenKind::Protected,
            "as" => TokenKind::As,
            "new" => TokenKind::New,
            "insteadof" => TokenKind::Insteadof,
            "implements" => TokenKind::Implements,
            "namespace" => TokenKind::Namespace,
            "use" => TokenKind::Use,
            "class" => TokenKind::Class,
            "interface" => TokenKind::Interface,
            "trait" => TokenKind::Trait,
            "extends" => TokenKind::Extends,
            "static" => TokenKind::Static,
            "return" => TokenKind::Return,
            "echo" => TokenKind::Echo,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable name for diagnostics and debug output.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::DocComment => "doc comment",
            TokenKind::OpenTag => "open tag",
            TokenKind::CloseTag => "close tag",
            TokenKind::InlineHtml => "inline html",
            TokenKind::Ident => "identifier",
            TokenKind::Variable => "variable",
            TokenKind::LNumber => "integer",
            TokenKind::DNumber => "float",
            TokenKind::ConstantString => "string",
            TokenKind::Function => "function",
            TokenKind::Const => "const",
            TokenKind::Public => "public",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::As => "as",
            TokenKind::New => "new",
            TokenKind::Insteadof => "insteadof",
            TokenKind::Implements => "implements",
            TokenKind::Namespace => "namespace",
            TokenKind::Use => "use",
            TokenKind::Class => "class",
            TokenKind::Interface => "interface",
            TokenKind::Trait => "trait",
            TokenKind::Extends => "extends",
            TokenKind::Static => "static",
            TokenKind::Return => "return",
            TokenKind::Echo => "echo",
            TokenKind::NsSeparator => "\\",
            TokenKind::ObjectOperator => "->",
            TokenKind::NullsafeObjectOperator => "?->",
            TokenKind::DoubleColon => "::",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Ampersand => "&",
            TokenKind::Other => "operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
