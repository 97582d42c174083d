use std::fmt;

use crate::terminal::{Terminal, TerminalToken, normalize};
use crate::token::{Span, Token};
use crate::tree::ParseNode;

/// Label reported in expected sets when only end of input may follow.
pub const END_OF_INPUT: &str = "end-of-input";

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The current token fits none of the grammar's alternatives at
    /// this position.
    UnexpectedToken {
        found: String,
        expected: Vec<&'static str>,
    },
    /// `program` parsed completely but tokens remain.
    TrailingInput { found: String },
}

impl ParseErrorKind {
    /// The set of terminal labels that would have been accepted.
    #[must_use]
    pub fn expected(&self) -> &[&'static str] {
        match self {
            Self::UnexpectedToken { expected, .. } => expected,
            Self::TrailingInput { .. } => &[END_OF_INPUT],
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(
                    f,
                    "expected one of [{}], got '{found}'",
                    expected.join(", ")
                )
            }
            Self::TrailingInput { found } => {
                write!(f, "trailing input starting at '{found}'")
            }
        }
    }
}

/// Error produced during parsing. The first failure aborts the parse;
/// there is no recovery or resynchronization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

const STATEMENT_STARTS: [&str; 5] = ["if", "repeat", "read", "write", "identifier"];
const FACTOR_STARTS: [&str; 3] = ["(", "number", "identifier"];

/// Parse a scanned token sequence into a parse tree.
///
/// Tokens are normalized to grammar terminals first (see
/// [`crate::terminal::normalize`]); comments never reach the grammar.
///
/// # Errors
///
/// Returns [`ParseError`] at the first grammar violation, carrying the
/// offending token's position and the accepted terminal set, or a
/// trailing-input error if tokens remain after a complete `program`.
pub fn parse(tokens: &[Token]) -> Result<ParseNode, ParseError> {
    Parser::new(normalize(tokens)).parse()
}

struct Parser {
    tokens: Vec<TerminalToken>,
    pos: usize,
}

impl Parser {
    const fn new(tokens: Vec<TerminalToken>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<ParseNode, ParseError> {
        let program = self.parse_program()?;
        if let Some(token) = self.peek() {
            return Err(ParseError {
                kind: ParseErrorKind::TrailingInput {
                    found: token.lexeme.clone(),
                },
                span: token.span,
            });
        }
        Ok(program)
    }

    // program → statement-sequence
    fn parse_program(&mut self) -> Result<ParseNode, ParseError> {
        let sequence = self.parse_statement_sequence()?;
        Ok(ParseNode::branch("program", vec![sequence]))
    }

    // statement-sequence → statement (';' statement)*
    fn parse_statement_sequence(&mut self) -> Result<ParseNode, ParseError> {
        let mut children = vec![self.parse_statement()?];
        while self.eat_symbol(";") {
            children.push(ParseNode::leaf(";"));
            children.push(self.parse_statement()?);
        }
        Ok(ParseNode::branch("statement-sequence", children))
    }

    /// Dispatch on the current terminal; anything that cannot start a
    /// statement reports all five alternatives.
    fn parse_statement(&mut self) -> Result<ParseNode, ParseError> {
        let leading = self.peek().map(|t| t.terminal.clone());
        match leading {
            Some(t) if t.is_keyword("if") => self.parse_if(),
            Some(t) if t.is_keyword("repeat") => self.parse_repeat(),
            Some(t) if t.is_keyword("read") => self.parse_read(),
            Some(t) if t.is_keyword("write") => self.parse_write(),
            Some(Terminal::Ident) => self.parse_assign(),
            _ => Err(self.unexpected(STATEMENT_STARTS.to_vec())),
        }
    }

    // if-stmt → 'if' expr 'then' statement-sequence
    //           ['else' statement-sequence] 'end'
    fn parse_if(&mut self) -> Result<ParseNode, ParseError> {
        self.expect_keyword("if")?;
        let condition = self.parse_exp()?;
        self.expect_keyword("then")?;
        let then_sequence = self.parse_statement_sequence()?;

        let mut children = vec![
            ParseNode::leaf("if"),
            condition,
            ParseNode::leaf("then"),
            then_sequence,
        ];
        if self.eat_keyword("else") {
            children.push(ParseNode::leaf("else"));
            children.push(self.parse_statement_sequence()?);
        }
        self.expect_keyword("end")?;
        children.push(ParseNode::leaf("end"));

        Ok(ParseNode::branch("if-stmt", children))
    }

    // repeat-stmt → 'repeat' statement-sequence 'until' expr
    fn parse_repeat(&mut self) -> Result<ParseNode, ParseError> {
        self.expect_keyword("repeat")?;
        let body = self.parse_statement_sequence()?;
        self.expect_keyword("until")?;
        let condition = self.parse_exp()?;
        Ok(ParseNode::branch(
            "repeat-stmt",
            vec![
                ParseNode::leaf("repeat"),
                body,
                ParseNode::leaf("until"),
                condition,
            ],
        ))
    }

    // assign-stmt → IDENT ':=' expr
    fn parse_assign(&mut self) -> Result<ParseNode, ParseError> {
        let name = self.expect_ident()?;
        self.expect_symbol(":=")?;
        let value = self.parse_exp()?;
        Ok(ParseNode::branch(
            "assign-stmt",
            vec![
                ParseNode::branch("identifier", vec![ParseNode::leaf(name)]),
                ParseNode::leaf(":="),
                value,
            ],
        ))
    }

    // read-stmt → 'read' IDENT
    fn parse_read(&mut self) -> Result<ParseNode, ParseError> {
        self.expect_keyword("read")?;
        let name = self.expect_ident()?;
        Ok(ParseNode::branch(
            "read-stmt",
            vec![
                ParseNode::leaf("read"),
                ParseNode::branch("identifier", vec![ParseNode::leaf(name)]),
            ],
        ))
    }

    // write-stmt → 'write' expr
    fn parse_write(&mut self) -> Result<ParseNode, ParseError> {
        self.expect_keyword("write")?;
        let value = self.parse_exp()?;
        Ok(ParseNode::branch(
            "write-stmt",
            vec![ParseNode::leaf("write"), value],
        ))
    }

    // expr → simple-expr [('<' | '=') simple-expr]
    // Comparison is non-associative; '==' is accepted as a synonym for
    // '=' and recorded as '='.
    fn parse_exp(&mut self) -> Result<ParseNode, ParseError> {
        let left = self.parse_simple_exp()?;
        if self.eat_symbol("<") {
            let right = self.parse_simple_exp()?;
            return Ok(ParseNode::branch(
                "comparison",
                vec![left, ParseNode::leaf("<"), right],
            ));
        }
        if self.eat_symbol("=") || self.eat_symbol("==") {
            let right = self.parse_simple_exp()?;
            return Ok(ParseNode::branch(
                "comparison",
                vec![left, ParseNode::leaf("="), right],
            ));
        }
        Ok(left)
    }

    // simple-expr → term (('+' | '-') term)*   (left-associative)
    fn parse_simple_exp(&mut self) -> Result<ParseNode, ParseError> {
        let mut node = self.parse_term()?;
        loop {
            let op = if self.eat_symbol("+") {
                "+"
            } else if self.eat_symbol("-") {
                "-"
            } else {
                break;
            };
            let rhs = self.parse_term()?;
            node = ParseNode::branch("sum", vec![node, ParseNode::leaf(op), rhs]);
        }
        Ok(node)
    }

    // term → factor (('*' | '/') factor)*   (left-associative)
    fn parse_term(&mut self) -> Result<ParseNode, ParseError> {
        let mut node = self.parse_factor()?;
        loop {
            let op = if self.eat_symbol("*") {
                "*"
            } else if self.eat_symbol("/") {
                "/"
            } else {
                break;
            };
            let rhs = self.parse_factor()?;
            node = ParseNode::branch("mul", vec![node, ParseNode::leaf(op), rhs]);
        }
        Ok(node)
    }

    // factor → '(' expr ')' | NUM | IDENT
    fn parse_factor(&mut self) -> Result<ParseNode, ParseError> {
        if self.eat_symbol("(") {
            let inner = self.parse_exp()?;
            self.expect_symbol(")")?;
            return Ok(ParseNode::branch(
                "group",
                vec![ParseNode::leaf("("), inner, ParseNode::leaf(")")],
            ));
        }

        let leading = self.peek().map(|t| t.terminal.clone());
        match leading {
            Some(Terminal::Num) => {
                let lexeme = self.bump_lexeme();
                Ok(ParseNode::branch(
                    "number",
                    vec![ParseNode::leaf(lexeme)],
                ))
            }
            Some(Terminal::Ident) => {
                let lexeme = self.bump_lexeme();
                Ok(ParseNode::branch(
                    "identifier",
                    vec![ParseNode::leaf(lexeme)],
                ))
            }
            _ => Err(self.unexpected(FACTOR_STARTS.to_vec())),
        }
    }

    fn peek(&self) -> Option<&TerminalToken> {
        self.tokens.get(self.pos)
    }

    /// Consume the current token and return its lexeme. Only called
    /// after `peek` confirmed the terminal.
    fn bump_lexeme(&mut self) -> String {
        let lexeme = self.tokens[self.pos].lexeme.clone();
        self.pos += 1;
        lexeme
    }

    fn eat_symbol(&mut self, symbol: &str) -> bool {
        if self.peek().is_some_and(|t| t.terminal.is_symbol(symbol)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, word: &str) -> bool {
        if self.peek().is_some_and(|t| t.terminal.is_keyword(word)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the expected keyword or fail without advancing.
    fn expect_keyword(&mut self, word: &'static str) -> Result<(), ParseError> {
        if self.eat_keyword(word) {
            Ok(())
        } else {
            Err(self.unexpected(vec![word]))
        }
    }

    /// Consume the expected operator/delimiter or fail without
    /// advancing.
    fn expect_symbol(&mut self, symbol: &'static str) -> Result<(), ParseError> {
        if self.eat_symbol(symbol) {
            Ok(())
        } else {
            Err(self.unexpected(vec![symbol]))
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        if self.peek().is_some_and(|t| t.terminal == Terminal::Ident) {
            Ok(self.bump_lexeme())
        } else {
            Err(self.unexpected(vec!["identifier"]))
        }
    }

    fn unexpected(&self, expected: Vec<&'static str>) -> ParseError {
        let (found, span) = self.peek().map_or_else(
            || (String::from("end of input"), self.last_span()),
            |t| (t.lexeme.clone(), t.span),
        );
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { found, expected },
            span,
        }
    }

    /// Position reported when the terminal stream is exhausted.
    fn last_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span { line: 1, column: 1 }, |t| t.span)
    }
}
