#[cfg(test)]
/// Recognizer unit tests.
///
/// These tests exercise whole programs end to end: valid programs must be
/// accepted with the stream consumed to end-of-input, and invalid ones must
/// fail at the first mismatch with the right category, line, and expectation.
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;

    #[test]
    fn test_minimal_function() {
        let source = "fun f ( x : int ) : int\nreturn x\nend\n";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_global_declaration() {
        assert!(parse("x : int\n").is_ok());
        assert!(parse("xs : [ ] [ ] int\n").is_ok());
    }

    #[test]
    fn test_program_needs_at_least_one_declaration() {
        let err = parse("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 1);
        assert!(err.message.contains("variable name"), "got: {}", err.message);
        assert_eq!(err.lexeme, "end of file");

        // Blank lines alone are not a program either.
        let err = parse("\n\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_globals_and_functions_mix() {
        let source = "\
x : int
fun inc ( n : int ) : int
return n + 1
end
y : bool
fun main ( )
y = true
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_leading_blank_lines_are_allowed() {
        let source = "\n\n\nx : int\n";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_missing_colon_in_global_is_reported_on_line_one() {
        let err = parse("x int\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 1);
        assert!(err.message.contains("':'"), "should name the colon, got: {}", err.message);
        assert_eq!(err.lexeme, "int");
    }

    #[test]
    fn test_block_declarations_then_statements() {
        let source = "\
fun f ( )
x : int
y : [ ] char
x = 1
y [ 0 ] = x
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_declaration_vs_statement_lookahead() {
        // `a [ 0 ] = 1` starts with an identifier but the peeked token is
        // `[`, so it must be taken as a statement, not a declaration.
        let source = "\
fun f ( a : [ ] int )
a [ 0 ] = 1
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_else_if_chain() {
        let source = "\
fun f ( x : int ) : int
y : int
if x > 2
y = 1
else if x < 0
y = 2
else
y = 3
end
return y
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_if_without_else() {
        let source = "\
fun f ( x : int )
if x == 0
x = 1
end
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_dangling_else_is_rejected() {
        let source = "\
fun f ( )
else
end
";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 2);
        assert!(err.message.contains("'end'"), "got: {}", err.message);
        assert_eq!(err.lexeme, "else");
    }

    #[test]
    fn test_while_loop() {
        let source = "\
fun count ( n : int ) : int
i : int
i = 0
while i < n and true
i = i + 1
loop
return i
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_while_must_close_with_loop() {
        let source = "\
fun f ( )
while true
end
";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.message.contains("'loop'"), "got: {}", err.message);
        assert_eq!(err.lexeme, "end");
    }

    #[test]
    fn test_return_with_and_without_expression() {
        let source = "\
fun a ( )
return
end
fun b ( ) : int
return 1 + 2
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_call_statement_and_call_expression() {
        let source = "\
fun f ( x : int , y : int ) : int
return x
end
fun main ( )
z : int
f ( 1 , 2 )
f ( )
z = f ( z , f ( 0 , 1 ) ) + 1
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_expression_ladder() {
        let source = "\
fun f ( a : bool , b : bool , x : int ) : bool
return not a or b and x + 1 * 2 - -3 / 4 <= 10 <> 5 == 5
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_array_constructor_and_indexing() {
        let source = "\
fun f ( n : int ) : [ ] int
m : [ ] [ ] int
m = new [ n ] [ ] int
m [ 0 ] = new [ n + 1 ] int
return m [ 0 ]
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_missing_close_paren() {
        let source = "\
fun f ( )
x : int
x = ( 1 + 2
end
";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("')'"), "got: {}", err.message);
    }

    #[test]
    fn test_missing_end_reports_at_eof() {
        let source = "fun f ( )\nreturn\n";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("'end'"), "got: {}", err.message);
        assert_eq!(err.lexeme, "end of file");
    }

    #[test]
    fn test_unterminated_string_is_a_lexical_error_at_its_line() {
        let source = "\
fun f ( )
y : int
y = \"abc
end
";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("Unterminated"), "got: {}", err.message);
        assert_eq!(err.lexeme, "\"abc");
    }

    #[test]
    fn test_malformed_number_is_a_lexical_error() {
        let source = "\
fun f ( )
x : int
x = 123abc
end
";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("number"), "got: {}", err.message);
        assert_eq!(err.lexeme, "123abc");
    }

    #[test]
    fn test_lexical_error_wins_over_syntax_mismatch() {
        // The error token sits where a declaration (and then end-of-input)
        // would be required; it must still be reported as lexical.
        let source = "x : int\n123abc : int\n";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.line, 2);
        assert_eq!(err.lexeme, "123abc");
    }

    #[test]
    fn test_unrecognized_character_mid_statement() {
        let source = "\
fun f ( )
x : int
x = 1 @ 2
end
";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.line, 3);
        assert_eq!(err.lexeme, "@");
    }

    #[test]
    fn test_trailing_garbage_after_program() {
        // A complete program followed by something no declaration can start.
        let source = "x : int\n)\n";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.line, 2);
        assert!(err.message.contains("end of file"), "got: {}", err.message);
        assert_eq!(err.lexeme, ")");
    }

    #[test]
    fn test_comments_and_blank_lines_inside_functions() {
        let source = "\
// leading comment
fun f ( ) // trailing comment
// a comment line still ends in a newline, which reads as a blank line

return
end
";
        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_nested_control_flow() {
        let source = "\
fun f ( n : int ) : int
i : int
acc : int
i = 0
acc = 0
while i < n
if i / 2 * 2 == i
acc = acc + i
else
acc = acc - i
end
i = i + 1
loop
return acc
end
";
        assert!(parse(source).is_ok());
    }
}
