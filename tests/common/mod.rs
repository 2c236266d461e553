#![allow(dead_code)]

use ccfront::{ParseError, ParseErrorKind, Program, Token, TokenKind, parse, tokenize};

/// Tokenize and parse, panicking with the error message on failure.
pub fn parse_ok(input: &str) -> Program {
    let tokens = tokenize(input);
    parse(&tokens).unwrap_or_else(|e| panic!("parse failed: {e}\n--- input ---\n{input}"))
}

/// Tokenize and parse, panicking if parsing succeeds.
pub fn parse_err(input: &str) -> ParseError {
    let tokens = tokenize(input);
    match parse(&tokens) {
        Ok(program) => panic!("expected an error, parsed {program:?}\n--- input ---\n{input}"),
        Err(e) => e,
    }
}

/// `(kind, text)` pairs, ignoring lines.
pub fn kinds_and_texts(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .into_iter()
        .map(|Token { kind, text, .. }| (kind, text))
        .collect()
}

/// True when `err` is an `ExpectedToken` whose description starts
/// with `prefix`.
pub fn expects(err: &ParseError, prefix: &str) -> bool {
    matches!(
        &err.kind,
        ParseErrorKind::ExpectedToken { expected, .. } if expected.starts_with(prefix)
    )
}
