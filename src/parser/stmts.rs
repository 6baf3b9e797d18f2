/// Statement-level productions.
///
/// Both two-token decisions of the grammar live here: declaration-vs-statement
/// at the head of a block, and else-vs-else-if inside conditionals.
impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks and statements
    // ========================================================================

    /// block → (var-decl NL)* (statement NL)*
    ///
    /// An identifier opens a variable declaration iff the token after it is
    /// `:`; once the first statement starts, no further declarations are
    /// accepted.
    fn block(&mut self) -> Result<(), ParseError> {
        while self.check(TokenKind::Ident) && self.peek_second().kind == TokenKind::Colon {
            self.var_decl()?;
            self.newline()?;
        }
        while matches!(
            self.current.kind,
            TokenKind::If | TokenKind::While | TokenKind::Return | TokenKind::Ident
        ) {
            self.statement()?;
            self.newline()?;
        }
        Ok(())
    }

    /// statement → if | while | return | identifier-led
    fn statement(&mut self) -> Result<(), ParseError> {
        match self.current.kind {
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Return => self.return_statement(),
            _ => self.ident_statement(),
        }
    }

    /// identifier-led → name '(' args ')' | name ('[' exp ']')* '=' exp
    ///
    /// A call and an (indexed) assignment both begin with a name; the token
    /// after it decides which one this is.
    fn ident_statement(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Ident, "Expected statement")?;
        if self.match_token(TokenKind::LParen) {
            self.arg_list()?;
            self.expect(TokenKind::RParen, "Expected ')' after arguments")
        } else {
            self.index_suffixes()?;
            self.expect(TokenKind::Assign, "Expected '=' in assignment")?;
            self.expression()
        }
    }

    /// if → 'if' exp NL block ('else' 'if' exp NL block)* ('else' NL block)? 'end'
    ///
    /// `else` extends the chain only when the peeked token is `if`; a bare
    /// `else` is the final branch.
    fn if_statement(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::If, "Expected 'if'")?;
        self.expression()?;
        self.newline()?;
        self.block()?;
        while self.check(TokenKind::Else) && self.peek_second().kind == TokenKind::If {
            self.advance(); // else
            self.advance(); // if
            self.expression()?;
            self.newline()?;
            self.block()?;
        }
        if self.match_token(TokenKind::Else) {
            self.newline()?;
            self.block()?;
        }
        self.expect(TokenKind::End, "Expected 'end' to close 'if'")
    }

    /// while → 'while' exp NL block 'loop'
    fn while_statement(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::While, "Expected 'while'")?;
        self.expression()?;
        self.newline()?;
        self.block()?;
        self.expect(TokenKind::Loop, "Expected 'loop' to close 'while'")
    }

    /// return → 'return' exp?
    ///
    /// The expression is present iff the current token can start one.
    fn return_statement(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Return, "Expected 'return'")?;
        if self.is_at_expr_start() {
            self.expression()?;
        }
        Ok(())
    }
}
