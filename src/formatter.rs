use std::fmt::Write;

use crate::token::Token;

/// Render a token listing, one `KIND lexeme literal` line per token.
///
/// Every line, including the last, ends with `\n`.
#[must_use]
pub fn format(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{token}");
    }
    out
}
