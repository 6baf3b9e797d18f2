/// Expression productions.
///
/// This chunk implements the expression grammar as a precedence ladder:
/// `or` → `and` → relational → additive → multiplicative → unary → primary.
/// Each level loops over its operator set and recurses into the next-tighter
/// level, so the whole ladder needs only the single buffered token.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<(), ParseError> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<(), ParseError> {
        self.and_expr()?;
        while self.match_token(TokenKind::Or) {
            self.and_expr()?;
        }
        Ok(())
    }

    fn and_expr(&mut self) -> Result<(), ParseError> {
        self.comparison()?;
        while self.match_token(TokenKind::And) {
            self.comparison()?;
        }
        Ok(())
    }

    fn comparison(&mut self) -> Result<(), ParseError> {
        self.additive()?;
        while matches!(
            self.current.kind,
            TokenKind::Greater
                | TokenKind::Less
                | TokenKind::GreaterEq
                | TokenKind::LessEq
                | TokenKind::EqEq
                | TokenKind::NotEq
        ) {
            self.advance();
            self.additive()?;
        }
        Ok(())
    }

    fn additive(&mut self) -> Result<(), ParseError> {
        self.multiplicative()?;
        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.advance();
            self.multiplicative()?;
        }
        Ok(())
    }

    fn multiplicative(&mut self) -> Result<(), ParseError> {
        self.unary()?;
        while self.check(TokenKind::Star) || self.check(TokenKind::Slash) {
            self.advance();
            self.unary()?;
        }
        Ok(())
    }

    /// unary → ('not' | '-') unary | primary
    fn unary(&mut self) -> Result<(), ParseError> {
        if self.check(TokenKind::Not) || self.check(TokenKind::Minus) {
            self.advance();
            self.unary()
        } else {
            self.primary()
        }
    }

    /// primary → literal | 'new' '[' exp ']' type | '(' exp ')' | name ref-rest
    ///
    /// where ref-rest is a call-argument list or a chain of index suffixes.
    fn primary(&mut self) -> Result<(), ParseError> {
        match self.current.kind {
            TokenKind::Number | TokenKind::Str | TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(())
            }
            TokenKind::New => {
                self.advance();
                self.expect(TokenKind::LBracket, "Expected '[' after 'new'")?;
                self.expression()?;
                self.expect(TokenKind::RBracket, "Expected ']' after array size")?;
                self.type_expr()
            }
            TokenKind::LParen => {
                self.advance();
                self.expression()?;
                self.expect(TokenKind::RParen, "Expected ')' after expression")
            }
            TokenKind::Ident => {
                self.advance();
                if self.match_token(TokenKind::LParen) {
                    self.arg_list()?;
                    self.expect(TokenKind::RParen, "Expected ')' after arguments")
                } else {
                    self.index_suffixes()
                }
            }
            _ => Err(self.error_here("Expected an expression")),
        }
    }

    /// Comma-separated call arguments, possibly empty.
    fn arg_list(&mut self) -> Result<(), ParseError> {
        if self.is_at_expr_start() {
            self.expression()?;
            while self.match_token(TokenKind::Comma) {
                self.expression()?;
            }
        }
        Ok(())
    }

    /// Zero or more `'[' exp ']'` index suffixes.
    fn index_suffixes(&mut self) -> Result<(), ParseError> {
        while self.match_token(TokenKind::LBracket) {
            self.expression()?;
            self.expect(TokenKind::RBracket, "Expected ']' after index")?;
        }
        Ok(())
    }
}
