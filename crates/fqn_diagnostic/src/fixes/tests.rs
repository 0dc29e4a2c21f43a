use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_apply_edits_in_any_order() {
    let source = "strlen($a) + count($b);";
    let edits = vec![
        TextEdit::replace(Span::new(13, 18), "\\count"),
        TextEdit::replace(Span::new(0, 6), "\\strlen"),
    ];
    assert_eq!(
        apply_edits(source, &edits).unwrap(),
        "\\strlen($a) + \\count($b);"
    );
}

#[test]
fn test_apply_edits_empty() {
    assert_eq!(apply_edits("echo 1;", &[]).unwrap(), "echo 1;");
}

#[test]
fn test_apply_edits_overlap() {
    let edits = vec![
        TextEdit::replace(Span::new(0, 6), "a"),
        TextEdit::replace(Span::new(3, 8), "b"),
    ];
    assert_eq!(
        apply_edits("0123456789", &edits),
        Err(EditError::Overlap {
            first: Span::new(0, 6),
            second: Span::new(3, 8),
        })
    );
}

#[test]
fn test_apply_edits_out_of_bounds() {
    let edits = vec![TextEdit::replace(Span::new(2, 40), "x")];
    let err = apply_edits("short", &edits).unwrap_err();
    assert_eq!(
        err,
        EditError::OutOfBounds {
            span: Span::new(2, 40),
            len: 5,
        }
    );
    assert!(err.to_string().contains("outside"));
}

#[test]
fn test_apply_edits_splits_inside_multibyte_text() {
    let edits = vec![TextEdit::replace(Span::new(1, 2), "x")];
    assert!(matches!(
        apply_edits("é", &edits),
        Err(EditError::OutOfBounds { .. })
    ));
}
