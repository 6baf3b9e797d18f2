/// Recognize Mini-0 source text.
///
/// This is the main public entrypoint: it wires a fresh [`Lexer`] to a
/// [`Parser`] and runs recognition over the whole input, up to and including
/// end-of-input.
///
/// ## Errors
/// Returns the first (and only) [`ParseError`]; recognition stops at the
/// first lexical or syntactic mismatch.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<(), ParseError> {
    Parser::new(Lexer::new(source)).parse()
}
