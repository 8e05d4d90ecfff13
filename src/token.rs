use std::fmt;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuators.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Reserved words.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End of input. Always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Canonical upper-case name used in token listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        }
    }

    /// Whether this kind is a reserved word.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Class
                | Self::Else
                | Self::False
                | Self::Fun
                | Self::For
                | Self::If
                | Self::Nil
                | Self::Or
                | Self::Print
                | Self::Return
                | Self::Super
                | Self::This
                | Self::True
                | Self::Var
                | Self::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal value carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Literal {
    /// Punctuation, operators, identifiers and keywords.
    #[default]
    Absent,
    /// Text between the quotes of a string literal, unescaped.
    String(String),
    /// Canonical decimal text of a number literal (`3.0`, `3.14`).
    Number(String),
}

impl Literal {
    /// Build a number literal from its parsed value.
    ///
    /// Integral values keep exactly one fractional digit. Everything
    /// else uses the shortest digits that parse back to the same `f64`,
    /// in exponent form when the decimal exponent is below -4 or at
    /// least 6 (`1e-05`, `1.2345675e+06`). Infinity renders as `+Inf`.
    #[must_use]
    pub fn number(value: f64) -> Self {
        let text = if value.is_infinite() {
            if value.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string()
        } else if value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            general(value)
        };
        Self::Number(text)
    }
}

/// Shortest round-trip text, switching to exponent form outside
/// `1e-4 <= |value| < 1e6`.
fn general(value: f64) -> String {
    let sci = format!("{value:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{value}");
    };

    if (-4..6).contains(&exp) {
        format!("{value}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("null"),
            Self::String(text) | Self::Number(text) => f.write_str(text),
        }
    }
}

/// A single token with its kind, source text, literal value and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Literal,
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_number_keeps_one_digit() {
        assert_eq!(Literal::number(3.0), Literal::Number("3.0".into()));
        assert_eq!(Literal::number(0.0), Literal::Number("0.0".into()));
    }

    #[test]
    fn fractional_number_is_shortest() {
        assert_eq!(Literal::number(2.5), Literal::Number("2.5".into()));
        assert_eq!(Literal::number(0.1), Literal::Number("0.1".into()));
    }

    #[test]
    fn small_fractions_switch_to_exponent() {
        assert_eq!(Literal::number(0.0001), Literal::Number("0.0001".into()));
        assert_eq!(Literal::number(0.00001), Literal::Number("1e-05".into()));
        assert_eq!(Literal::number(0.000_012_5), Literal::Number("1.25e-05".into()));
    }

    #[test]
    fn large_fractions_switch_to_exponent() {
        assert_eq!(Literal::number(123_456.5), Literal::Number("123456.5".into()));
        assert_eq!(
            Literal::number(1_234_567.5),
            Literal::Number("1.2345675e+06".into())
        );
    }

    #[test]
    fn infinity_renders_like_overflow() {
        assert_eq!(Literal::number(f64::INFINITY), Literal::Number("+Inf".into()));
    }

    #[test]
    fn absent_literal_renders_null() {
        assert_eq!(Literal::Absent.to_string(), "null");
    }

    #[test]
    fn token_display() {
        let token = Token {
            kind: TokenKind::String,
            lexeme: "\"hi\"".to_string(),
            literal: Literal::String("hi".to_string()),
            line: 1,
        };
        assert_eq!(token.to_string(), "STRING \"hi\" hi");
    }

    #[test]
    fn eof_display_has_two_spaces() {
        let token = Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: Literal::Absent,
            line: 1,
        };
        assert_eq!(token.to_string(), "EOF  null");
    }

    #[test]
    fn keyword_kinds() {
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }
}
