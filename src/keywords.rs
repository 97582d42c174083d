//! Fixed lexical vocabularies shared by the scanner and the
//! reserved-word marking transform.
//!
//! The reserved-word set is the union of three common language keyword
//! vocabularies plus the parsed language's own keywords, so source
//! resembling any of them classifies consistently. All tables are built
//! once and never mutated; the scanner may run concurrently against them.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Python keywords, lowercased.
const PYTHON_KEYWORDS: &[&str] = &[
    "false", "none", "true", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// C and C++ keywords.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if", "int",
    "long", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "typedef", "union", "unsigned", "void", "volatile",
    "while", "class", "public", "private", "protected", "virtual", "template",
    "typename", "namespace", "using", "new", "delete", "include", "define",
    "bool", "true", "false", "try", "catch", "throw", "this", "operator",
    "friend", "inline",
];

/// Java keywords.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// Keywords of the parsed language itself. `if` and `else` are already
/// covered by the sets above.
const GRAMMAR_KEYWORDS: &[&str] = &["then", "end", "repeat", "until", "read", "write"];

lazy_static! {
    /// Union of all keyword vocabularies, lowercased.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = PYTHON_KEYWORDS
        .iter()
        .chain(C_KEYWORDS)
        .chain(JAVA_KEYWORDS)
        .chain(GRAMMAR_KEYWORDS)
        .copied()
        .collect();
}

/// Operator table, longest entries first. Scanning tries entries in
/// order, so a prefix like `>=` can never shadow `>>=` or `>>>=`.
pub const OPERATORS: &[&str] = &[
    ">>>=", // 4 chars
    "<<=", ">>=", // 3 chars
    ":=", "==", "!=", ">=", "<=", "&&", "||", "++", "--", "->", "::", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", // 2 chars
    "+", "-", "*", "/", "%", "=", "<", ">", "!", "~", "&", "|", "^", "?", ":",
    ".", ",", ";", // 1 char
];

/// Delimiter characters, each its own token.
pub const DELIMITERS: &[char] = &['(', ')', '[', ']', '{', '}'];

/// Whether `word` (in any case) is in the reserved-word set.
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word.to_lowercase().as_str())
}
