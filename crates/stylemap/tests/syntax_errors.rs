//! Integration tests for syntax errors and unfinished input.

use stylemap::{
    EndOfInput, ParseOptions, SyntaxError, parse_partial, parse_stylesheet, parse_stylesheet_with,
};

// ============================================================================
// UNEXPECTED TOKENS
// ============================================================================

#[test]
fn test_missing_separator() {
    let err = parse_stylesheet("a { c 1; }").unwrap_err();
    assert_eq!(err.line(), 1);
    assert_eq!(err.token_text(), "1");
    insta::assert_snapshot!(err.to_string(), @"line 1: unexpected token 1");
}

#[test]
fn test_error_reports_offending_line() {
    let css = "a {\n  c: 1;\n}\n\nb {\n  d 2;\n}\n";
    let err = parse_stylesheet(css).unwrap_err();
    assert_eq!(err.line(), 6);
    assert_eq!(err.message(), "unexpected token 2");
}

#[test]
fn test_block_end_without_block() {
    let err = parse_stylesheet("a { c: 1; } }").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnexpectedToken {
            line: 1,
            token: "}".to_string()
        }
    );
}

#[test]
fn test_statement_end_outside_block() {
    let err = parse_stylesheet("a;").unwrap_err();
    assert_eq!(err.token_text(), ";");
}

#[test]
fn test_double_semicolon() {
    let err = parse_stylesheet("a { c: 1;; }").unwrap_err();
    assert_eq!(err.token_text(), ";");
}

#[test]
fn test_pseudo_class_rejected() {
    let err = parse_stylesheet("a:hover { c: 1; }").unwrap_err();
    assert_eq!(err.token_text(), ":");
}

#[test]
fn test_errors_are_deterministic() {
    let css = "a { c: 1; }\nb { : }";
    assert_eq!(
        parse_stylesheet(css).unwrap_err(),
        parse_stylesheet(css).unwrap_err()
    );
}

#[test]
fn test_separator_in_property_position() {
    let err = parse_stylesheet("a { c: 1; }\nb { : }").unwrap_err();
    assert_eq!(err.token_text(), ":");
    assert_eq!(err.line(), 2);
}

#[test]
fn test_prefix_inside_block() {
    let err = parse_stylesheet("a { c: 1; # }").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::UnexpectedToken {
            line: 1,
            token: "#".to_string()
        }
    );
}

#[test]
fn test_prefix_inside_block_before_next_rule() {
    let css = "a { c: 1; # }\nb { d: 2; }";
    let err = parse_stylesheet(css).unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedToken { line: 1, .. }));
    assert_eq!(err.token_text(), "#");

    // Lenient mode only relaxes end of input, not grammar errors
    let lenient = parse_stylesheet_with(css, &ParseOptions::lenient()).unwrap_err();
    assert_eq!(lenient, err);

    let (sheet, _) = parse_partial(css, &ParseOptions::default());
    assert!(sheet.is_empty());
}

// ============================================================================
// END OF INPUT
// ============================================================================

#[test]
fn test_unclosed_block_strict() {
    let err = parse_stylesheet("a { c: 1;").unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedEndOfInput { .. }));
    insta::assert_snapshot!(err.to_string(), @"line 1: unexpected end of input after ;");
}

#[test]
fn test_unclosed_block_lenient() {
    let sheet = parse_stylesheet_with("a { c: 1;", &ParseOptions::lenient()).unwrap();
    assert!(!sheet.contains("a"));
}

#[test]
fn test_unclosed_block_keeps_earlier_rules_when_lenient() {
    let options = ParseOptions::strict().with_end_of_input(EndOfInput::Discard);
    let sheet = parse_stylesheet_with("a { c: 1; }\nb { d: 2;", &options).unwrap();
    assert!(sheet.contains("a"));
    assert!(!sheet.contains("b"));
}

#[test]
fn test_dangling_prefix() {
    let err = parse_stylesheet("a { c: 1; } .").unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedEndOfInput { .. }));
    assert_eq!(err.token_text(), ".");
}

// ============================================================================
// PARTIAL RESULTS
// ============================================================================

#[test]
fn test_partial_returns_committed_blocks() {
    let css = "a { c: 1; }\nb { d: 2; }\nc { e 3; }";
    let (sheet, err) = parse_partial(css, &ParseOptions::default());

    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.get("b").unwrap()["d"], "2");
    assert_eq!(err.map(|e| e.line()), Some(3));
}

#[test]
fn test_partial_without_error() {
    let (sheet, err) = parse_partial("a { c: 1; }", &ParseOptions::default());
    assert!(err.is_none());
    assert_eq!(sheet.len(), 1);
}
