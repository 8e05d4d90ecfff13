use std::fmt;

use crate::keywords;
use crate::token::{Literal, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Double-quoted string still open at end of input.
    UnterminatedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "Unexpected character: {ch}")
            }
            Self::UnterminatedString => {
                write!(f, "Unterminated string.")
            }
        }
    }
}

/// Error recorded during scanning.
///
/// Displays as the diagnostic line printed by the CLI, e.g.
/// `[line 3] Error: Unterminated string.`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

/// Outcome of a complete scan.
///
/// `tokens` always ends with a single [`TokenKind::Eof`] token, even
/// when errors were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Scan {
    /// Whether any lexical error was recorded.
    #[must_use]
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan a source string into tokens, collecting every lexical error.
#[must_use]
pub fn tokenize(input: &str) -> Scan {
    Scanner::new(input).scan()
}

/// Single-pass scanner over one source buffer.
///
/// A scanner is consumed by [`Scanner::scan`] or [`Scanner::scan_with`];
/// build a fresh one for every input.
pub struct Scanner<'a> {
    source: &'a str,
    input: &'a [u8],
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let start = if source.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        Self {
            source,
            input: source.as_bytes(),
            start,
            current: start,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Run the scan to completion, collecting errors silently.
    #[must_use]
    pub fn scan(self) -> Scan {
        self.scan_with(|_| {})
    }

    /// Run the scan to completion, handing each error to `on_error`
    /// as soon as it is detected.
    pub fn scan_with<F>(mut self, mut on_error: F) -> Scan
    where
        F: FnMut(&LexError),
    {
        while !self.is_at_end() {
            self.start = self.current;
            if let Err(err) = self.scan_token() {
                tracing::trace!(line = err.line, "{}", err.kind);
                on_error(&err);
                self.errors.push(err);
            }
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: Literal::Absent,
            line: self.line,
        });

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan finished"
        );

        Scan {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        match self.advance() {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => self.add_either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.add_either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.add_either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.matches(b'/') {
                    self.skip_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\t' | b'\r' => {}
            b'\n' => self.line += 1,
            b'"' => self.read_string()?,
            b'0'..=b'9' => self.read_number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.read_identifier(),
            _ => return Err(self.unexpected_character()),
        }
        Ok(())
    }

    const fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn advance(&mut self) -> u8 {
        let ch = self.input[self.current];
        self.current += 1;
        ch
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.input.get(self.current + 1).copied()
    }

    fn matches(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> &'a str {
        self.source
            .get(self.start..self.current)
            .unwrap_or_default()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, Literal::Absent);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal,
            line: self.line,
        });
    }

    fn add_either(&mut self, next: u8, matched: TokenKind, bare: TokenKind) {
        let kind = if self.matches(next) { matched } else { bare };
        self.add_token(kind);
    }

    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|ch| ch != b'\n') {
            self.current += 1;
        }
    }

    fn read_string(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        line: self.line,
                    });
                }
                Some(b'"') => break,
                Some(ch) => {
                    // strings may span lines
                    if ch == b'\n' {
                        self.line += 1;
                    }
                    self.current += 1;
                }
            }
        }
        self.current += 1; // closing quote

        let value = self
            .source
            .get(self.start + 1..self.current - 1)
            .unwrap_or_default()
            .to_string();
        self.add_literal(TokenKind::String, Literal::String(value));
        Ok(())
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.current += 1;
        }
    }

    fn read_number(&mut self) {
        self.consume_digits();

        // a trailing '.' without a digit is left for the next token
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
            self.current += 1;
            self.consume_digits();
        }

        let value = self.lexeme().parse::<f64>().unwrap_or(f64::INFINITY);
        self.add_literal(TokenKind::Number, Literal::number(value));
    }

    fn read_identifier(&mut self) {
        while self
            .peek()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == b'_')
        {
            self.current += 1;
        }

        let kind = keywords::lookup(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn unexpected_character(&mut self) -> LexError {
        // report multi-byte characters whole rather than byte by byte
        let ch = self
            .source
            .get(self.start..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.current = (self.start + ch.len_utf8()).min(self.input.len());

        LexError {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            line: self.line,
        }
    }
}
