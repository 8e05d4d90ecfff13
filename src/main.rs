//! CLI tool to tokenize Lox source files.

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use lox_lexer::{Scanner, format, logging};

/// Exit status when the scan recorded lexical errors.
const EXIT_LEX_ERROR: u8 = 65;

fn usage() {
    eprintln!("Usage: lox tokenize <filename>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokenize  Print the tokens of a Lox source file");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {}   Log level (off, error, warn, info, debug, trace)", logging::LOG_ENV);
}

fn main() -> ExitCode {
    logging::init_from_env();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();
    if command != "tokenize" {
        eprintln!("Unknown command: {command}");
        return ExitCode::FAILURE;
    }

    let Some(path) = args.get(2) else {
        usage();
        return ExitCode::FAILURE;
    };

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error reading file {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let source = String::from_utf8_lossy(&bytes);
    tracing::debug!(path = %path, bytes = bytes.len(), "tokenizing");

    let scan = Scanner::new(&source).scan_with(|err| eprintln!("{err}"));

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(format(&scan.tokens).as_bytes()) {
        tracing::error!("failed to write tokens: {e}");
        return ExitCode::FAILURE;
    }

    if scan.had_error() {
        ExitCode::from(EXIT_LEX_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}
