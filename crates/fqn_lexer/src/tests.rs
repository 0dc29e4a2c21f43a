use pretty_assertions::assert_eq;

use super::*;

/// Kinds and texts of the non-trivia tokens.
fn significant(source: &str) -> Vec<(TokenKind, String)> {
    let stream = tokenize(source).unwrap();
    (0..stream.len())
        .filter(|&i| !stream.kind(i).unwrap().is_trivia())
        .map(|i| (stream.kind(i).unwrap(), stream.text(i).unwrap().to_string()))
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    significant(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_simple_call() {
    assert_eq!(
        significant("<?php echo strlen('x');"),
        vec![
            (TokenKind::OpenTag, "<?php".to_string()),
            (TokenKind::Echo, "echo".to_string()),
            (TokenKind::Ident, "strlen".to_string()),
            (TokenKind::OpenParen, "(".to_string()),
            (TokenKind::ConstantString, "'x'".to_string()),
            (TokenKind::CloseParen, ")".to_string()),
            (TokenKind::Semicolon, ";".to_string()),
        ]
    );
}

#[test]
fn test_tokens_cover_source() {
    let source = "<html>\n<?php\n// c\n$a = \\strlen($b) ?>\n</html>";
    let stream = tokenize(source).unwrap();

    let mut rebuilt = String::new();
    let mut expected_start = 0;
    for i in 0..stream.len() {
        let token = stream.get(i).unwrap();
        assert_eq!(token.span.start, expected_start);
        expected_start = token.span.end;
        rebuilt.push_str(stream.text(i).unwrap());
    }
    assert_eq!(rebuilt, source);
}

#[test]
fn test_inline_html_and_close_tag() {
    assert_eq!(
        kinds("<p><?= count($x) ?></p>"),
        vec![
            TokenKind::InlineHtml,
            TokenKind::OpenTag,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::Variable,
            TokenKind::CloseParen,
            TokenKind::CloseTag,
            TokenKind::InlineHtml,
        ]
    );
}

#[test]
fn test_no_open_tag_is_all_html() {
    assert_eq!(kinds("strlen('x');"), vec![TokenKind::InlineHtml]);
}

#[test]
fn test_open_tag_case_insensitive() {
    assert_eq!(kinds("<?PHP\nfoo();")[0], TokenKind::OpenTag);
}

#[test]
fn test_php_prefix_word_is_not_a_tag() {
    assert_eq!(kinds("<?phpx"), vec![TokenKind::InlineHtml]);
}

#[test]
fn test_keywords_case_insensitive() {
    assert_eq!(
        kinds("<?php FUNCTION Strlen() {} New Foo();"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Function,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::New,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_operators_the_rule_inspects() {
    assert_eq!(
        kinds("<?php $o->a(); $o?->b(); Foo::c(); \\d();"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Variable,
            TokenKind::ObjectOperator,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::Variable,
            TokenKind::NullsafeObjectOperator,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::DoubleColon,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::NsSeparator,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_comments() {
    let stream = tokenize("<?php // a\n# b\n/* c */ /** d */ /**/").unwrap();
    let comment_kinds: Vec<_> = (0..stream.len())
        .filter_map(|i| stream.kind(i))
        .filter(|k| matches!(k, TokenKind::Comment | TokenKind::DocComment))
        .collect();
    assert_eq!(
        comment_kinds,
        vec![
            TokenKind::Comment,
            TokenKind::Comment,
            TokenKind::Comment,
            TokenKind::DocComment,
            TokenKind::Comment,
        ]
    );
}

#[test]
fn test_block_comment_is_one_token() {
    assert_eq!(
        significant("<?php /* c */ x /** d\n * e */ y"),
        vec![
            (TokenKind::OpenTag, "<?php".to_string()),
            (TokenKind::Ident, "x".to_string()),
            (TokenKind::Ident, "y".to_string()),
        ]
    );

    let stream = tokenize("<?php a/* c */b").unwrap();
    assert_eq!(stream.kind(3), Some(TokenKind::Comment));
    assert_eq!(stream.text(3), Some("/* c */"));
}

#[test]
fn test_block_comment_hides_close_tag_and_calls() {
    assert_eq!(
        kinds("<?php /* ?> strlen('x') */ count($a);"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::Variable,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    let stream = tokenize("<?php /* strlen('x');").unwrap();
    let last = stream.len() - 1;
    assert_eq!(stream.kind(last), Some(TokenKind::Other));
    assert_eq!(stream.text(last), Some("/* strlen('x');"));
    assert_eq!(stream.positions_of(TokenKind::Ident).count(), 0);
}

#[test]
fn test_ampersand() {
    assert_eq!(
        kinds("<?php function &f() {} $a && $b; $a &= $b;"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Function,
            TokenKind::Ampersand,
            TokenKind::Ident,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::Variable,
            TokenKind::Other,
            TokenKind::Variable,
            TokenKind::Semicolon,
            TokenKind::Variable,
            TokenKind::Other,
            TokenKind::Variable,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_attribute_is_not_a_comment() {
    assert_eq!(
        kinds("<?php #[Pure]\nfunction f() {}")[1..4].to_vec(),
        vec![TokenKind::Other, TokenKind::Ident, TokenKind::CloseBracket]
    );
}

#[test]
fn test_strings_hide_calls() {
    assert_eq!(
        kinds("<?php $a = 'strlen(1)' . \"count(\\\"x\\\")\";"),
        vec![
            TokenKind::OpenTag,
            TokenKind::Variable,
            TokenKind::Other,
            TokenKind::ConstantString,
            TokenKind::Other,
            TokenKind::ConstantString,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_heredoc() {
    let source = "<?php\n$a = <<<EOT\nstrlen(1)\n  EOT;\ncount($b);";
    let tokens = significant(source);
    assert_eq!(tokens[3], (TokenKind::ConstantString, "<<<EOT\nstrlen(1)\n  EOT".to_string()));
    assert_eq!(tokens[4].0, TokenKind::Semicolon);
    assert_eq!(tokens[5], (TokenKind::Ident, "count".to_string()));
}

#[test]
fn test_nowdoc() {
    let tokens = significant("<?php $a = <<<'EOT'\nx\nEOT;");
    assert_eq!(tokens[3].0, TokenKind::ConstantString);
    assert!(tokens[3].1.ends_with("EOT"));
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("<?php 1; 0x1F; 1_000; 1.5; .5; 1e3;"),
        vec![
            TokenKind::OpenTag,
            TokenKind::LNumber,
            TokenKind::Semicolon,
            TokenKind::LNumber,
            TokenKind::Semicolon,
            TokenKind::LNumber,
            TokenKind::Semicolon,
            TokenKind::DNumber,
            TokenKind::Semicolon,
            TokenKind::DNumber,
            TokenKind::Semicolon,
            TokenKind::DNumber,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_empty_source() {
    let stream = tokenize("").unwrap();
    assert!(stream.is_empty());
}

#[test]
fn test_unterminated_string_does_not_fail() {
    let stream = tokenize("<?php $a = 'oops").unwrap();
    assert!(!stream.is_empty());
}
