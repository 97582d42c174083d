//! End-to-end tests for the scan → normalize → parse pipeline and the
//! report renderings built on top of it.

mod common;

use common::{assert_tokens_cover, parse_input};
use tinylang_rs::{
    ParseErrorKind, Span, TokenKind, kind_counts, mark_reserved, parse_source, scan, tokens_tsv,
    tree_text,
};

// -----------------------------------------------------------
// Scanner guarantees.
// -----------------------------------------------------------

#[test]
fn longest_match_determinism() {
    let tokens = scan("<<=");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, "<<=");

    let tokens = scan("0x1F");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::HexLit);
}

#[test]
fn keyword_classification_across_vocabularies() {
    for word in ["if", "class", "transient"] {
        let tokens = scan(word);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::ReservedWord, "{word}");
    }
    let tokens = scan("foo123");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}

#[test]
fn scan_is_total_over_garbage() {
    let input = "\u{0}\u{7f}@@@\"unclosed /* unclosed\n\t$$$ 0b 1e+";
    let tokens = scan(input);
    assert!(!tokens.is_empty());
    assert_eq!(scan(input), tokens);
}

// -----------------------------------------------------------
// Grammar acceptance and rejection (fields exactly as exposed).
// -----------------------------------------------------------

#[test]
fn acceptance_with_precedence() {
    let tree = parse_input("x := 1 + 2 * 3").expect("parse failed");
    let rendered = tree_text(&tree);
    let expected = "\
program
  statement-sequence
    assign-stmt
      identifier
        x
      :=
      sum
        number
          1
        +
        mul
          number
            2
          *
          number
            3
";
    assert_eq!(rendered, expected);
}

#[test]
fn rejection_carries_position_and_expected_set() {
    let err = parse_input("if x then\n  5 end").expect_err("must fail");
    assert_eq!(err.span, Span { line: 2, column: 3 });
    match &err.kind {
        ParseErrorKind::UnexpectedToken { found, expected } => {
            assert_eq!(found, "5");
            assert_eq!(
                expected.as_slice(),
                ["if", "repeat", "read", "write", "identifier"]
            );
        }
        ParseErrorKind::TrailingInput { .. } => panic!("wrong kind: {err}"),
    }
}

#[test]
fn trailing_input_after_program() {
    let err = parse_input("x := 1 ; y := 2 )").expect_err("must fail");
    assert!(matches!(
        err.kind,
        ParseErrorKind::TrailingInput { ref found } if found == ")"
    ));
    assert_eq!(err.span, Span { line: 1, column: 17 });
}

#[test]
fn parse_source_is_scan_then_parse() {
    let via_helper = parse_source("read x");
    let via_stages = parse_input("read x");
    assert_eq!(via_helper, via_stages);
}

// -----------------------------------------------------------
// Whole-pipeline run over a realistic document.
// -----------------------------------------------------------

#[test]
fn full_report_over_factorial_program() {
    let input = "// factorial\nread x ;\nrepeat\n  x := x - 1\nuntil x < 1 ;\nwrite x";
    assert_tokens_cover(input);

    let tokens = scan(input);
    let counts = kind_counts(&tokens);
    assert_eq!(counts.get(&TokenKind::Comment), Some(&1));
    assert_eq!(counts.get(&TokenKind::ReservedWord), Some(&4));
    assert_eq!(counts.get(&TokenKind::Identifier), Some(&5));

    let tsv = tokens_tsv(&tokens);
    assert_eq!(tsv.lines().count(), tokens.len() + 1);
    assert!(tsv.starts_with("kind\tlexeme\tline\tcolumn\n"));
    assert!(tsv.contains("COMMENT\t// factorial\t1\t1"));

    let tree = tinylang_rs::parse(&tokens).expect("parse failed");
    let rendered = tree_text(&tree);
    assert!(rendered.contains("repeat-stmt"));
    assert!(rendered.contains("  statement-sequence"));
}

// -----------------------------------------------------------
// Reserved-word marking transform.
// -----------------------------------------------------------

#[test]
fn marking_reuses_the_keyword_set_only() {
    let marked = mark_reserved("if total then 42");
    assert_eq!(marked.output, "RESERVED VARIABLE RESERVED 42");
    assert_eq!(marked.reserved, 2);
    assert_eq!(marked.variables, 1);
}
