/// Recognizer core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all recognizer
///   methods in a single module while avoiding a single “god file”.

/// Recognizer state.
///
/// Owns the lexer it pulls from plus a single-slot lookahead buffer.
/// Invariant: except during construction, `current` holds the next token not
/// yet matched by a grammar rule.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new recognizer, priming the lookahead with the first token.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Recognize the entire token stream as a Mini-0 program.
    ///
    /// Succeeds iff the stream reduces to the `program` start symbol followed
    /// immediately by end-of-input.
    ///
    /// ## Errors
    /// Returns the first mismatch as a [`ParseError`]. The first error is
    /// fatal: there is no recovery, no resynchronization, and no second error.
    pub fn parse(mut self) -> Result<(), ParseError> {
        self.program()?;
        if !self.check(TokenKind::Eof) {
            return Err(self.error_here("Expected end of file"));
        }
        Ok(())
    }
}
