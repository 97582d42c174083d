//! Reserved-word marking: a standalone text transform that reuses only
//! the keyword vocabulary, not the scanner. Every maximal
//! identifier-shaped run is replaced with a label saying whether its
//! lowercase form is reserved, and both groups are counted.

use lazy_static::lazy_static;
use regex::Regex;

use crate::keywords::is_reserved;

/// Label substituted for reserved words.
pub const RESERVED_LABEL: &str = "RESERVED";
/// Label substituted for every other identifier-shaped run.
pub const VARIABLE_LABEL: &str = "VARIABLE";

lazy_static! {
    // letter or underscore, then letters/digits/underscores
    static ref IDENT_RUN: Regex =
        Regex::new(r"[\p{L}_][\p{L}\p{N}_]*").expect("identifier pattern");
}

/// Result of [`mark_reserved`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marked {
    /// Input text with every identifier-shaped run replaced.
    pub output: String,
    /// Runs whose lowercase form is in the reserved-word set.
    pub reserved: usize,
    /// All other runs.
    pub variables: usize,
}

/// Replace each maximal identifier-shaped run in `text` with
/// [`RESERVED_LABEL`] or [`VARIABLE_LABEL`] and count both groups.
/// Everything between runs passes through untouched.
#[must_use]
pub fn mark_reserved(text: &str) -> Marked {
    let mut output = String::with_capacity(text.len());
    let mut reserved = 0;
    let mut variables = 0;
    let mut last_end = 0;

    for m in IDENT_RUN.find_iter(text) {
        output.push_str(&text[last_end..m.start()]);
        if is_reserved(m.as_str()) {
            reserved += 1;
            output.push_str(RESERVED_LABEL);
        } else {
            variables += 1;
            output.push_str(VARIABLE_LABEL);
        }
        last_end = m.end();
    }
    output.push_str(&text[last_end..]);

    Marked {
        output,
        reserved,
        variables,
    }
}
