//! Token types for the Mini-0 lexer.
//!
//! Tokens are plain values: a kind, the exact source substring that was
//! matched, and the 1-based line of the token's first character. The lexeme
//! borrows from the source text, so tokens are `Copy` and allocation-free.
//!
//! ## Notes
//! - Lexical failures are represented as `Error` tokens rather than raised at
//!   scan time; the parser escalates them when it reaches one.

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keywords ==========
    Fun,
    If,
    Else,
    While,
    End,
    Loop,
    Return,
    New,
    True,
    False,

    // ========== Base type names ==========
    IntType,
    BoolType,
    CharType,
    StringType,

    // ========== Word operators ==========
    Or,
    And,
    Not,

    // ========== Identifiers and literals ==========
    Ident,
    Number,
    Str,

    // ========== Relational operators ==========
    Greater,
    Less,
    GreaterEq,
    LessEq,
    EqEq,
    NotEq,

    // ========== Arithmetic operators ==========
    Plus,
    Minus,
    Star,
    Slash,

    // ========== Assignment ==========
    Assign,

    // ========== Delimiters ==========
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,
    Colon,

    // ========== Structure ==========
    Newline,
    Eof,

    // ========== Lexical errors, deferred to the parser ==========
    Error(LexErrorKind),
}

/// Why a lexeme could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A digit run with letters glued to it, e.g. `123abc`.
    MalformedNumber,
    /// A string literal still open at the end of its line (or of the input).
    UnterminatedString,
    /// A character no lexical rule matches.
    UnexpectedChar,
}

impl TokenKind {
    /// Return `true` for the error marker, whatever its cause.
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Fun => "'fun'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::End => "'end'",
            TokenKind::Loop => "'loop'",
            TokenKind::Return => "'return'",
            TokenKind::New => "'new'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::IntType => "'int'",
            TokenKind::BoolType => "'bool'",
            TokenKind::CharType => "'char'",
            TokenKind::StringType => "'string'",
            TokenKind::Or => "'or'",
            TokenKind::And => "'and'",
            TokenKind::Not => "'not'",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Str => "string",
            TokenKind::Greater => "'>'",
            TokenKind::Less => "'<'",
            TokenKind::GreaterEq => "'>='",
            TokenKind::LessEq => "'<='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'<>'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Assign => "'='",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
            TokenKind::Error(_) => "invalid token",
        };
        f.write_str(name)
    }
}

/// A token with its kind, matched lexeme, and source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: u32,
}

impl<'a> Token<'a> {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: &'a str, line: u32) -> Self {
        Self { kind, text, line }
    }
}

/// Resolve an identifier spelling to its keyword kind, if reserved.
pub fn keyword_kind(spelling: &str) -> Option<TokenKind> {
    let kind = match spelling {
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "end" => TokenKind::End,
        "loop" => TokenKind::Loop,
        "return" => TokenKind::Return,
        "new" => TokenKind::New,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "int" => TokenKind::IntType,
        "bool" => TokenKind::BoolType,
        "char" => TokenKind::CharType,
        "string" => TokenKind::StringType,
        "or" => TokenKind::Or,
        "and" => TokenKind::And,
        "not" => TokenKind::Not,
        _ => return None,
    };
    Some(kind)
}
