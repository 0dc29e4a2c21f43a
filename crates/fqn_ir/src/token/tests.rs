use pretty_assertions::assert_eq;

use super::*;

fn sample_stream() -> TokenStream {
    // strlen ( $s )
    let source = "strlen ($s)";
    let tokens = TokenList::from_vec(vec![
        Token::new(TokenKind::Ident, Span::new(0, 6)),
        Token::new(TokenKind::Whitespace, Span::new(6, 7)),
        Token::new(TokenKind::OpenParen, Span::new(7, 8)),
        Token::new(TokenKind::Variable, Span::new(8, 10)),
        Token::new(TokenKind::CloseParen, Span::new(10, 11)),
    ]);
    TokenStream::new(source, tokens)
}

#[test]
fn test_trivia_kinds() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(TokenKind::DocComment.is_trivia());
    assert!(!TokenKind::Ident.is_trivia());
    assert!(!TokenKind::NsSeparator.is_trivia());
    assert!(!TokenKind::InlineHtml.is_trivia());
}

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("function"), Some(TokenKind::Function));
    assert_eq!(TokenKind::keyword("insteadof"), Some(TokenKind::Insteadof));
    assert_eq!(TokenKind::keyword("implements"), Some(TokenKind::Implements));
    assert_eq!(TokenKind::keyword("strlen"), None);
    // callers lowercase before lookup
    assert_eq!(TokenKind::keyword("NEW"), None);
}

#[test]
fn test_token_list_kinds_parallel() {
    let stream = sample_stream();
    let list = stream.tokens();
    assert_eq!(list.len(), 5);
    for (i, token) in list.iter().enumerate() {
        assert_eq!(list.kind(i), Some(token.kind));
    }
    assert_eq!(list.kind(5), None);
}

#[test]
fn test_token_list_push_and_collect() {
    let mut pushed = TokenList::with_capacity(2);
    pushed.push(Token::dummy(TokenKind::Ident));
    pushed.push(Token::dummy(TokenKind::OpenParen));

    let collected: TokenList = [
        Token::dummy(TokenKind::Ident),
        Token::dummy(TokenKind::OpenParen),
    ]
    .into_iter()
    .collect();

    assert_eq!(pushed, collected);
    assert_eq!(pushed[1].kind, TokenKind::OpenParen);
}

#[test]
fn test_stream_text() {
    let stream = sample_stream();
    assert_eq!(stream.text(0), Some("strlen"));
    assert_eq!(stream.text(3), Some("$s"));
    assert_eq!(stream.text(99), None);
}

#[test]
fn test_stream_text_out_of_source() {
    let tokens = TokenList::from_vec(vec![Token::new(TokenKind::Ident, Span::new(0, 40))]);
    let stream = TokenStream::new("short", tokens);
    assert_eq!(stream.text(0), None);
}

#[test]
fn test_positions_of() {
    let stream = sample_stream();
    let idents: Vec<_> = stream.positions_of(TokenKind::Ident).collect();
    assert_eq!(idents, vec![0]);
    let parens: Vec<_> = stream.positions_of(TokenKind::OpenParen).collect();
    assert_eq!(parens, vec![2]);
}

#[test]
fn test_token_debug() {
    let token = Token::new(TokenKind::Ident, Span::new(3, 9));
    assert_eq!(format!("{token:?}"), "Ident @ 3..9");
    assert_eq!(TokenKind::DoubleColon.to_string(), "::");
}
