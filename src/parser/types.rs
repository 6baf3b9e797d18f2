/// Type-annotation productions.
///
/// Types are a base type name or a bracket pair prefixing another type
/// (array-of-type), so `[ ] [ ] int` reads as array of array of int.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// type → 'int' | 'bool' | 'char' | 'string' | '[' ']' type
    fn type_expr(&mut self) -> Result<(), ParseError> {
        if self.match_token(TokenKind::IntType)
            || self.match_token(TokenKind::BoolType)
            || self.match_token(TokenKind::CharType)
            || self.match_token(TokenKind::StringType)
        {
            return Ok(());
        }

        if self.match_token(TokenKind::LBracket) {
            self.expect(TokenKind::RBracket, "Expected ']' in array type")?;
            return self.type_expr();
        }

        Err(self.error_here("Expected a type"))
    }
}
