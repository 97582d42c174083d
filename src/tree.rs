/// Node of the concrete-syntax parse tree.
///
/// The tree keeps every consumed keyword, operator, and delimiter as a
/// zero-child leaf labeled with its own lexeme, so it reflects the
/// source's concrete syntax rather than an abstracted form. Terminal
/// values (identifier and number lexemes) appear as a leaf under their
/// wrapping branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    /// Zero-child node: a structure marker or a terminal lexeme.
    Leaf(String),
    /// Interior node labeled with its grammar production.
    Branch {
        label: String,
        children: Vec<ParseNode>,
    },
}

impl ParseNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::Leaf(label.into())
    }

    pub fn branch(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Branch {
            label: label.into(),
            children,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(label) | Self::Branch { label, .. } => label,
        }
    }

    /// Children in source order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch { children, .. } => children,
        }
    }
}
