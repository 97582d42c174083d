//! Text renderings of scan and parse results: an indented parse-tree
//! listing, a tab-separated token table, and per-kind token counts.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::token::{Token, TokenKind};
use crate::tree::ParseNode;

/// Render a parse tree as indented text: depth-first, two-space indent
/// per level, each node's label on its own line.
#[must_use]
pub fn tree_text(root: &ParseNode) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &ParseNode, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(node.label());
    out.push('\n');
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}

/// Tab-separated `(kind, lexeme, line, column)` table with a header
/// row. Tabs and newlines inside lexemes are escaped so every token
/// stays on one row.
#[must_use]
pub fn tokens_tsv(tokens: &[Token]) -> String {
    let mut out = String::from("kind\tlexeme\tline\tcolumn\n");
    for token in tokens {
        let lexeme = token.lexeme.replace('\t', "\\t").replace('\n', "\\n");
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            token.kind.label(),
            lexeme,
            token.span.line,
            token.span.column
        );
    }
    out
}

/// Count tokens per lexical kind. The map iterates in the kind enum's
/// declaration order, so reports are stable across runs.
#[must_use]
pub fn kind_counts(tokens: &[Token]) -> BTreeMap<TokenKind, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.kind).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use crate::parser::parse;

    #[test]
    fn tree_rendering_indents_two_spaces_per_level() {
        let tree = parse(&scan("read x")).expect("parse failed");
        let expected = "\
program
  statement-sequence
    read-stmt
      read
      identifier
        x
";
        assert_eq!(tree_text(&tree), expected);
    }

    #[test]
    fn tsv_has_header_and_one_row_per_token() {
        let out = tokens_tsv(&scan("x := 1"));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "kind\tlexeme\tline\tcolumn");
        assert_eq!(lines[1], "IDENTIFIER\tx\t1\t1");
        assert_eq!(lines[2], "OPERATOR\t:=\t1\t3");
        assert_eq!(lines[3], "NUMBER_INT\t1\t1\t6");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn tsv_escapes_tabs_and_newlines_in_lexemes() {
        let out = tokens_tsv(&scan("/*a\tb\nc*/"));
        let row = out.lines().nth(1).expect("missing row");
        assert_eq!(row, "COMMENT\t/*a\\tb\\nc*/\t1\t1");
    }

    #[test]
    fn counts_group_by_kind() {
        let counts = kind_counts(&scan("if x then y end"));
        assert_eq!(counts.get(&TokenKind::ReservedWord), Some(&3));
        assert_eq!(counts.get(&TokenKind::Identifier), Some(&2));
        assert_eq!(counts.get(&TokenKind::IntLit), None);
    }
}
