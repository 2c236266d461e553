//! Lexer and recursive-descent parser for a small C-like language.
//!
//! The language covers `int`/`string` declarations, stream handle
//! declarations (`ifstream f("in.txt");`), member calls on handles,
//! and `if`, `while` and `for` blocks. Parsing is fail-fast: the
//! first syntax error ends the pass and reports its source line.
//!
//! # Quick start
//!
//! ```
//! use ccfront::{tokenize, parse, Node};
//!
//! let tokens = tokenize("int a, b;");
//! let program = parse(&tokens).unwrap();
//! assert_eq!(program.statements, [Node::declaration("int", &["a", "b"])]);
//! ```
//!
//! ## Errors cite the offending line
//!
//! ```
//! let err = ccfront::parse_str("while (x) {\n").unwrap_err();
//! assert_eq!(err.to_string(), "Mismatched brackets detected, unclosed '{' at line 1.");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod brackets;
pub mod builder;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use ast::{Expr, Identifier, Node, Program};
pub use brackets::{Bracket, BracketTracker};
pub use lexer::tokenize;
pub use parser::{ParseError, ParseErrorKind, parse};
pub use printer::{format_tokens, format_tree};
pub use token::{Token, TokenKind};

/// Unified error type for the whole front end.
///
/// Tokenizing never fails, so parsing is the only source today.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Tokenize and parse a source string in one step.
pub fn parse_str(input: &str) -> Result<Program, Error> {
    let tokens = tokenize(input);
    Ok(parse(&tokens)?)
}
