#![allow(dead_code)]

use lox_lexer::{LexError, TokenKind, format, tokenize};

/// Scan `input` and return the rendered token listing.
pub fn listing(input: &str) -> String {
    format(&tokenize(input).tokens)
}

/// Scan `input` and return the rendered token lines.
pub fn lines(input: &str) -> Vec<String> {
    listing(input).lines().map(str::to_string).collect()
}

/// Scan `input` and return only the token kinds.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).tokens.iter().map(|t| t.kind).collect()
}

/// Scan `input` and return the diagnostic lines for every error.
pub fn diagnostics(input: &str) -> Vec<String> {
    tokenize(input)
        .errors
        .iter()
        .map(LexError::to_string)
        .collect()
}
