#![allow(dead_code)]

use tinylang_rs::{ParseError, ParseNode, parse, scan};

pub fn parse_input(input: &str) -> Result<ParseNode, ParseError> {
    parse(&scan(input))
}

/// Assert the scanner's coverage invariant for `input`: every token's
/// lexeme sits exactly at its reported line/column, tokens do not
/// overlap, and everything between tokens is whitespace. Together with
/// the skipped regions this reconstructs the source with no characters
/// gained or lost.
pub fn assert_tokens_cover(input: &str) {
    let chars: Vec<char> = input.chars().collect();

    // char offset of the start of each line
    let mut line_starts = vec![0_usize];
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '\n' {
            line_starts.push(i + 1);
        }
    }

    let mut cursor = 0_usize;
    for token in scan(input) {
        let start = line_starts[token.span.line - 1] + token.span.column - 1;
        let lexeme: Vec<char> = token.lexeme.chars().collect();

        assert!(start >= cursor, "token overlaps its predecessor: {token:?}");
        assert!(
            chars[cursor..start]
                .iter()
                .all(|&c| matches!(c, ' ' | '\t' | '\r' | '\n')),
            "non-whitespace gap before {token:?}"
        );
        assert!(
            start + lexeme.len() <= chars.len(),
            "lexeme runs past end of input: {token:?}"
        );
        assert_eq!(
            &chars[start..start + lexeme.len()],
            lexeme.as_slice(),
            "lexeme not anchored at its span: {token:?}"
        );

        cursor = start + lexeme.len();
    }

    assert!(
        chars[cursor..]
            .iter()
            .all(|&c| matches!(c, ' ' | '\t' | '\r' | '\n')),
        "non-whitespace tail after the last token"
    );
}
