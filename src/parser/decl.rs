/// Declaration-level productions.
///
/// A program is a sequence of declarations, each either a function or a
/// global variable. Functions and globals share the `name : type` shape for
/// variables and parameters.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// program → blank-lines declaration declaration*
    ///
    /// At least one declaration is required; further ones keep being consumed
    /// while the current token can start one (`fun` or an identifier).
    fn program(&mut self) -> Result<(), ParseError> {
        self.skip_newlines();
        self.declaration()?;
        while self.check(TokenKind::Fun) || self.check(TokenKind::Ident) {
            self.declaration()?;
        }
        Ok(())
    }

    /// declaration → function | global
    fn declaration(&mut self) -> Result<(), ParseError> {
        if self.check(TokenKind::Fun) {
            self.function_decl()
        } else {
            self.global_decl()
        }
    }

    /// global → var-decl NL
    fn global_decl(&mut self) -> Result<(), ParseError> {
        self.var_decl()?;
        self.newline()
    }

    /// function → 'fun' name '(' params ')' (':' type)? NL block 'end' NL
    fn function_decl(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Fun, "Expected 'fun'")?;
        self.expect(TokenKind::Ident, "Expected function name")?;
        self.expect(TokenKind::LParen, "Expected '(' after function name")?;
        self.params()?;
        self.expect(TokenKind::RParen, "Expected ')' after parameters")?;
        if self.match_token(TokenKind::Colon) {
            self.type_expr()?;
        }
        self.newline()?;
        self.block()?;
        self.expect(TokenKind::End, "Expected 'end' to close function")?;
        self.newline()
    }

    /// params → param (',' param)* | ε
    fn params(&mut self) -> Result<(), ParseError> {
        if self.check(TokenKind::Ident) {
            self.param()?;
            while self.match_token(TokenKind::Comma) {
                self.param()?;
            }
        }
        Ok(())
    }

    /// param → name ':' type
    fn param(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Ident, "Expected parameter name")?;
        self.expect(TokenKind::Colon, "Expected ':' after parameter name")?;
        self.type_expr()
    }

    /// var-decl → name ':' type
    fn var_decl(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Ident, "Expected variable name")?;
        self.expect(TokenKind::Colon, "Expected ':' after variable name")?;
        self.type_expr()
    }
}
