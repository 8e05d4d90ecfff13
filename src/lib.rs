//! Lexical scanner for the Lox scripting language.
//!
//! Turns source text into a flat list of classified tokens for a
//! parser. Scanning never stops at the first defect: every lexical
//! error in the input is recorded and the token list is always
//! returned, terminated by an `EOF` token.
//!
//! # Quick start
//!
//! ```
//! use lox_lexer::{TokenKind, format, tokenize};
//!
//! let scan = tokenize("var answer = 42;");
//! assert!(!scan.had_error());
//! assert_eq!(scan.tokens[0].kind, TokenKind::Var);
//! assert!(format(&scan.tokens).contains("NUMBER 42 42.0"));
//! ```
//!
//! ## Reporting errors as they are found
//!
//! ```
//! use lox_lexer::Scanner;
//!
//! let mut report = Vec::new();
//! let scan = Scanner::new("@ \"open").scan_with(|err| report.push(err.to_string()));
//! assert!(scan.had_error());
//! assert_eq!(report, [
//!     "[line 1] Error: Unexpected character: @",
//!     "[line 1] Error: Unterminated string.",
//! ]);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod formatter;
pub mod keywords;
pub mod lexer;
pub mod logging;
pub mod token;

pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, Scan, Scanner, tokenize};
pub use token::{Literal, Token, TokenKind};
