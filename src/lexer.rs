use crate::keywords::{DELIMITERS, OPERATORS, is_reserved};
use crate::token::{Span, Token, TokenKind};

/// Scan source text into its full token sequence.
///
/// Total over all inputs: malformed literals are absorbed as best-effort
/// spans and any character no rule recognizes becomes a one-character
/// [`TokenKind::Unknown`] token, so scanning always advances and never
/// fails. Lexemes are exact source slices; positions are the 1-based
/// line/column of each token's first character.
#[must_use]
pub fn scan(input: &str) -> Vec<Token> {
    Scanner::new(input).scan_all()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
        }
    }

    fn scan_all(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek() {
            match ch {
                // newline and horizontal whitespace produce no token;
                // advance() maintains the line/column counters
                '\n' | ' ' | '\t' | '\r' => self.advance(),
                '/' if matches!(self.peek_at(1), Some('/' | '*')) => self.read_comment(),
                '"' => self.read_quoted(TokenKind::StringLit, '"'),
                '\'' => self.read_quoted(TokenKind::CharLit, '\''),
                c if c.is_ascii_digit() => self.read_number(),
                '.' if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
                c if c.is_alphabetic() || c == '_' => self.read_word(),
                c if DELIMITERS.contains(&c) => {
                    let span = self.span();
                    self.advance();
                    self.push(TokenKind::Delimiter, c.to_string(), span);
                }
                c => self.read_operator_or_unknown(c),
            }
        }
        self.tokens
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(&ch) = self.chars.get(self.pos) {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    fn push(&mut self, kind: TokenKind, lexeme: String, span: Span) {
        self.tokens.push(Token { kind, lexeme, span });
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn rest_starts_with(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    /// `//` to end of line, or `/* ... */` which may span lines. An
    /// unterminated block comment consumes to end of input.
    fn read_comment(&mut self) {
        let span = self.span();
        let start = self.pos;
        self.advance(); // first '/'

        if self.peek() == Some('/') {
            while self.peek().is_some_and(|c| c != '\n') {
                self.advance();
            }
        } else {
            self.advance(); // '*'
            loop {
                match self.peek() {
                    None => break,
                    Some('*') if self.peek_at(1) == Some('/') => {
                        self.advance();
                        self.advance();
                        break;
                    }
                    Some(_) => self.advance(),
                }
            }
        }

        let lexeme = self.text_from(start);
        self.push(TokenKind::Comment, lexeme, span);
    }

    /// String or character literal. A backslash always escapes the
    /// following character; an unterminated literal consumes to end of
    /// input. Quotes stay part of the lexeme.
    fn read_quoted(&mut self, kind: TokenKind, quote: char) {
        let span = self.span();
        let start = self.pos;
        self.advance(); // opening quote

        loop {
            match self.peek() {
                None => break,
                Some('\\') if self.peek_at(1).is_some() => {
                    self.advance();
                    self.advance();
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some(_) => self.advance(),
            }
        }

        let lexeme = self.text_from(start);
        self.push(kind, lexeme, span);
    }

    /// Numeric literal: `0x`/`0b`/`0o` forms, else a decimal run with at
    /// most one `.` and one exponent. A malformed tail ends the token at
    /// the character that breaks the pattern; scanning never fails here.
    fn read_number(&mut self) {
        let span = self.span();
        let start = self.pos;

        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('x' | 'X')) {
            self.advance();
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.advance();
            }
            let lexeme = self.text_from(start);
            self.push(TokenKind::HexLit, lexeme, span);
            return;
        }

        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('b' | 'B')) {
            self.advance();
            self.advance();
            while matches!(self.peek(), Some('0' | '1')) {
                self.advance();
            }
            let lexeme = self.text_from(start);
            self.push(TokenKind::BinLit, lexeme, span);
            return;
        }

        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('o' | 'O')) {
            self.advance();
            self.advance();
            while matches!(self.peek(), Some('0'..='7')) {
                self.advance();
            }
            let lexeme = self.text_from(start);
            self.push(TokenKind::OctLit, lexeme, span);
            return;
        }

        let mut has_dot = false;
        let mut has_exp = false;
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => self.advance(),
                Some('.') => {
                    if has_dot {
                        break;
                    }
                    has_dot = true;
                    self.advance();
                }
                // an exponent marker counts only when a digit or sign
                // follows; the digit run after it ends the literal
                Some('e' | 'E')
                    if !has_exp
                        && self
                            .peek_at(1)
                            .is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-') =>
                {
                    has_exp = true;
                    self.advance();
                    if matches!(self.peek(), Some('+' | '-')) {
                        self.advance();
                    }
                    while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        self.advance();
                    }
                    break;
                }
                _ => break,
            }
        }

        let kind = if has_dot || has_exp {
            TokenKind::FloatLit
        } else {
            TokenKind::IntLit
        };
        let lexeme = self.text_from(start);
        self.push(kind, lexeme, span);
    }

    /// Maximal run of letters/digits/underscores; the lowercased run
    /// decides reserved word vs. identifier.
    fn read_word(&mut self) {
        let span = self.span();
        let start = self.pos;
        self.advance();
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = self.text_from(start);
        let kind = if is_reserved(&lexeme) {
            TokenKind::ReservedWord
        } else {
            TokenKind::Identifier
        };
        self.push(kind, lexeme, span);
    }

    /// Greedy longest match against the operator table; anything left
    /// over becomes a one-character unknown token.
    fn read_operator_or_unknown(&mut self, current: char) {
        let span = self.span();
        for op in OPERATORS {
            if self.rest_starts_with(op) {
                for _ in 0..op.len() {
                    self.advance();
                }
                self.push(TokenKind::Operator, (*op).to_string(), span);
                return;
            }
        }

        self.advance();
        self.push(TokenKind::Unknown, current.to_string(), span);
    }
}
