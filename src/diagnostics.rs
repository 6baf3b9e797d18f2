//! Diagnostics and error reporting for the Mini-0 recognizer
//!
//! A recognition run produces at most one error: the first lexical or
//! syntactic mismatch is fatal. Errors are returned as values so callers
//! (including tests) can inspect them; only the CLI decides to exit.

use thiserror::Error;

use crate::lexer::LexErrorKind;

/// Which layer rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lexer could not classify a lexeme.
    Lexical,
    /// A well-formed token appeared where the grammar required another.
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// The first error found while recognizing a program.
///
/// Carries the violated expectation, the offending lexeme, and the 1-based
/// source line of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] {kind}: {message}, found '{lexeme}'")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub lexeme: String,
    pub line: u32,
}

impl ParseError {
    /// A grammar mismatch at the given token.
    pub fn syntax(message: impl Into<String>, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            lexeme: lexeme.into(),
            line,
        }
    }

    /// An unclassifiable lexeme, escalated from an error token.
    pub fn lexical(cause: LexErrorKind, lexeme: impl Into<String>, line: u32) -> Self {
        let message = match cause {
            LexErrorKind::MalformedNumber => "Malformed number literal",
            LexErrorKind::UnterminatedString => "Unterminated string literal",
            LexErrorKind::UnexpectedChar => "Unrecognized character",
        };
        Self {
            kind: ErrorKind::Lexical,
            message: message.to_string(),
            lexeme: lexeme.into(),
            line,
        }
    }
}

/// Print an error with source context (simple implementation).
pub fn print_error(file_name: &str, source: &str, error: &ParseError) {
    // Color codes
    let red = "\x1b[31m";
    let cyan = "\x1b[36m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    // Print header
    eprintln!(
        "{bold}{red}{kind}{reset}{bold}: {message}{reset}",
        kind = error.kind,
        message = error.message,
    );

    // Print location
    eprintln!(
        "  {cyan}-->{reset} {file}:{line}",
        file = file_name,
        line = error.line,
    );

    // Print the offending source line, if it exists (an error at end of
    // input can sit one line past the last).
    if let Some(text) = source.lines().nth(error.line as usize - 1) {
        let width = error.line.to_string().len();
        eprintln!("  {cyan}{:>width$} |{reset}", "", width = width);
        eprintln!("  {cyan}{:>width$} |{reset} {}", error.line, text, width = width);
        eprintln!("  {cyan}{:>width$} |{reset}", "", width = width);
    }

    if !error.lexeme.is_empty() {
        eprintln!("  {cyan}= found:{reset} '{}'", error.lexeme);
    }

    eprintln!();
}
