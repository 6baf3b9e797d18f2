/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout recognition:
/// - Peeking/consuming tokens (`check`, `advance`, `match_token`, `expect`)
/// - The second token of lookahead (`peek_second`)
/// - Layout handling (`newline`, `skip_newlines`)
/// - Error construction (`error_here`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` iff the current token has exactly this kind. No side effect.
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// The token after `current`, without consuming anything.
    ///
    /// This is the recognizer's only source of two-token lookahead; the lexer
    /// guarantees the peek leaves its scan position untouched.
    fn peek_second(&mut self) -> Token<'a> {
        self.lexer.peek_token()
    }

    /// Pull the next token into the lookahead buffer.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// If the current token matches `kind`, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require the current token to match `kind` and consume it.
    ///
    /// ## Errors
    /// Fails with `msg` as the violated expectation. An error-kind token is
    /// escalated as a lexical error instead, whatever was expected here.
    fn expect(&mut self, kind: TokenKind, msg: &str) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Build the fatal diagnostic for the current token.
    ///
    /// A lexical-error token always wins over the syntax mismatch it would
    /// otherwise be reported as.
    fn error_here(&self, msg: &str) -> ParseError {
        match self.current.kind {
            TokenKind::Error(cause) => {
                ParseError::lexical(cause, self.current.text, self.current.line)
            }
            TokenKind::Eof => ParseError::syntax(msg, "end of file", self.current.line),
            TokenKind::Newline => ParseError::syntax(msg, "end of line", self.current.line),
            _ => ParseError::syntax(msg, self.current.text, self.current.line),
        }
    }

    /// One mandatory line break, then any number of blank lines.
    fn newline(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Newline, "Expected end of line")?;
        self.skip_newlines();
        Ok(())
    }

    fn skip_newlines(&mut self) {
        while self.match_token(TokenKind::Newline) {}
    }

    /// Check if the current token can start an expression.
    fn is_at_expr_start(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Ident
                | TokenKind::Number
                | TokenKind::Str
                | TokenKind::True
                | TokenKind::False
                | TokenKind::LParen
                | TokenKind::New
                | TokenKind::Minus
                | TokenKind::Not
        )
    }
}
