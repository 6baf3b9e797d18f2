//! Lexer for the Mini-0 language
//!
//! Handles tokenization including:
//! - Keywords, base type names, and word operators (`or`, `and`, `not`)
//! - Identifiers, number literals, and single-line string literals
//! - Two-character operators (`>=`, `<=`, `==`, `<>`) before one-character ones
//! - Significant newlines (emitted as their own tokens)
//!
//! The lexer is pull-based: tokens are produced one per `next_token()` call,
//! never pre-materialized. `peek_token()` gives the parser its second token
//! of lookahead without disturbing the scan position.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (Token, TokenKind, LexErrorKind)

pub mod tokens;

pub use tokens::{LexErrorKind, Token, TokenKind, keyword_kind};

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Mini-0 source code.
///
/// Owns the scan position: a byte offset into the source plus a line counter
/// that increments exactly once per consumed newline. Neither is ever
/// mutated from outside.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0, line: 1 }
    }

    /// Consume and return the next token.
    ///
    /// At end of input this keeps returning the same `Eof` token, so callers
    /// never have to guard against over-reading.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            // Skip space, tab, and carriage return; newlines are tokens.
            while let Some(c) = self.peek() {
                if c == ' ' || c == '\t' || c == '\r' {
                    self.advance();
                } else {
                    break;
                }
            }
            // Line comments produce no token; rescan after them. The newline
            // that ends the comment is left for the next scan.
            if self.source[self.pos..].starts_with("//") {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
                continue;
            }
            break;
        }

        let start = self.pos;
        let line = self.line;

        let Some(c) = self.advance() else {
            return Token::new(TokenKind::Eof, "", line);
        };

        let kind = match c {
            '\n' => TokenKind::Newline,
            '0'..='9' => self.scan_number(),
            '"' => self.scan_string(),
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEq
                } else if self.match_char('>') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Less
                }
            }
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            _ if is_ident_start(c) => self.scan_identifier(start),
            _ => TokenKind::Error(LexErrorKind::UnexpectedChar),
        };

        Token::new(kind, &self.source[start..self.pos], line)
    }

    /// Return what `next_token()` would return, consuming nothing.
    ///
    /// The scan position and line counter are snapshotted around an internal
    /// consuming scan and restored afterwards, so a peek leaves the lexer
    /// byte-for-byte identical to before the call.
    pub fn peek_token(&mut self) -> Token<'a> {
        let pos = self.pos;
        let line = self.line;
        let token = self.next_token();
        self.pos = pos;
        self.line = line;
        token
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Lexeme scanning
    // ========================================================================

    /// Maximal run of letters, digits, and underscores, then a keyword-table
    /// lookup; anything not reserved is a plain identifier.
    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }
        keyword_kind(&self.source[start..self.pos]).unwrap_or(TokenKind::Ident)
    }

    /// Maximal digit run. A letter glued directly to the digits poisons the
    /// whole alphanumeric run into one malformed-number token instead of
    /// splitting it into a number and an identifier.
    fn scan_number(&mut self) -> TokenKind {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }
        if matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
                self.advance();
            }
            return TokenKind::Error(LexErrorKind::MalformedNumber);
        }
        TokenKind::Number
    }

    /// Verbatim copy from `"` to `"`, no escape processing. The literal must
    /// close on its own line; a newline or end of input first makes it an
    /// unterminated-string error token, consuming nothing past the line.
    fn scan_string(&mut self) -> TokenKind {
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    return TokenKind::Str;
                }
                Some('\n') | None => return TokenKind::Error(LexErrorKind::UnterminatedString),
                Some(_) => {
                    self.advance();
                }
            }
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function that drains a fresh lexer into a vector, up to and
/// including the `Eof` token. Used by the CLI token dump and by tests; the
/// parser itself pulls tokens on demand and never materializes the stream.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Interleaving a peek before every pull yields the same token
        /// sequence as pulling alone, for arbitrary printable input.
        #[test]
        fn peek_then_next_is_identical(src in "[ -~\n]{0,64}") {
            let mut plain = Lexer::new(&src);
            let mut peeking = Lexer::new(&src);
            loop {
                let peeked = peeking.peek_token();
                let a = peeking.next_token();
                let b = plain.next_token();
                prop_assert_eq!(peeked, a);
                prop_assert_eq!(a, b);
                if a.kind == TokenKind::Eof {
                    break;
                }
            }
        }

        /// An identifier-shaped input is consumed as one maximal token.
        #[test]
        fn identifier_maximal_munch(src in "[a-z_][a-z0-9_]{0,16}") {
            let tokens = scan(&src);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].text, src.as_str());
            let expected = keyword_kind(&src).unwrap_or(TokenKind::Ident);
            prop_assert_eq!(tokens[0].kind, expected);
        }
    }
}
