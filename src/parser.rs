//! Recursive-descent recognizer for the Mini-0 grammar
//!
//! Walks the grammar top-down, pulling tokens from the lexer on demand and
//! failing fast on the first mismatch. No syntax tree is built: every
//! production returns `Ok(())` or the fatal [`ParseError`].
//!
//! Two decision points deliberately use a second token of lookahead, the
//! lexer's non-consuming `peek_token` on top of the buffered `current`:
//!
//! - at the head of a block, an identifier starts a variable declaration iff
//!   the following token is `:`, otherwise it starts a statement
//! - `else` continues an else-if chain iff the following token is `if`,
//!   otherwise it opens the final else branch
//!
//! ## Examples
//!
//! ```rust
//! use mini0::parser;
//!
//! assert!(parser::parse("x : int\n").is_ok());
//! assert!(parser::parse("fun f ( x : int ) : int\n return x\nend\n").is_ok());
//! ```

use crate::diagnostics::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all
// recognizer methods in the same Rust module (preserving privacy + call
// patterns) while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
