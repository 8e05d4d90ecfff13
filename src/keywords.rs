//! Reserved words of the language.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::token::TokenKind;

static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ])
});

/// Look up the reserved token kind for an identifier spelling.
///
/// Matching is exact and case-sensitive: `And` is an identifier.
#[must_use]
pub fn lookup(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}
