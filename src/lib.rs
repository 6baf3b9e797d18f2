#![forbid(unsafe_code)]
//! Mini-0 syntax recognizer
//!
//! Mini-0 is a small structured language with typed variables, arrays,
//! functions, conditionals, and loops. This crate implements its front end as
//! a pure recognizer: a pull-based lexer and a recursive-descent parser that
//! validate token order against the grammar and report the first error with
//! 1-based line information.
//!
//! ## Notes
//! - This crate is intentionally recognition-only: it builds no syntax tree
//!   and does no name resolution, type checking, or evaluation. Its entire
//!   output is a pass/fail verdict plus a diagnostic.
//! - The grammar needs at most two tokens of lookahead at every decision
//!   point; see `parser` for the two places that use the second token.
//!
//! ## Examples
//! ```rust
//! assert!(mini0::parse("x : int\n").is_ok());
//! assert!(mini0::parse("x int\n").is_err());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;

pub use diagnostics::{ErrorKind, ParseError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Parser, parse};
