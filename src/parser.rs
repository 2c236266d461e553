use std::fmt;

use log::debug;

use crate::ast::{Expr, Identifier, Node, Program};
use crate::brackets::{Bracket, BracketTracker};
use crate::token::{Token, TokenKind};

/// Keywords that start a `type a, b;` declaration.
pub const DECLARATION_TYPES: &[&str] = &["int", "string"];

/// Keywords that start a stream handle declaration.
pub const HANDLE_TYPES: &[&str] = &["ifstream", "ofstream", "fstream"];

/// Deepest block nesting, and longest `!` chain, the parser accepts.
pub const MAX_DEPTH: usize = 128;

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A specific token was required. `found` is `None` at end of input.
    ExpectedToken {
        expected: String,
        found: Option<String>,
    },
    /// No statement starts with this token.
    UnexpectedToken { text: String },
    /// Input ended with an opener still unclosed.
    MismatchedBracket { bracket: Bracket },
    /// Blocks or `!` prefixes nested past `limit`.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedToken {
                expected,
                found: None,
            } => {
                write!(f, "Expected {expected}")
            }
            Self::ExpectedToken {
                expected,
                found: Some(t),
            } => {
                write!(f, "Expected {expected}, got '{t}'")
            }
            Self::UnexpectedToken { text } => {
                write!(f, "Unexpected token: {text}")
            }
            Self::MismatchedBracket { bracket } => {
                write!(f, "Mismatched brackets detected, unclosed '{bracket}'")
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "Nesting deeper than {limit} levels")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}.")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
}

/// Parse a token stream into a `Program`.
///
/// # Errors
///
/// Returns the first `ParseError` encountered: a missing expected
/// token, a token no statement can start with, a bracket still
/// open when the input runs out, or blocks or `!` chains nested
/// deeper than [`MAX_DEPTH`].
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    brackets: BracketTracker,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            brackets: BracketTracker::new(),
        }
    }

    fn parse(mut self) -> Result<Program, ParseError> {
        let statements = self.parse_statements()?;

        // Unclosed blocks stop at end of input; report the innermost.
        if let Some((bracket, line)) = self.brackets.innermost() {
            debug!("unclosed '{bracket}' from line {line}");
            return Err(ParseError {
                kind: ParseErrorKind::MismatchedBracket { bracket },
                line,
            });
        }

        debug!("parsed {} top-level statement(s)", statements.len());
        Ok(Program { statements })
    }

    /// Top-level statements up to the end of input.
    fn parse_statements(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.advance() else {
            return Err(self.expected("statement"));
        };
        debug!("line {}: statement at {:?}", token.line, token.text);

        match token.kind {
            TokenKind::Keyword if DECLARATION_TYPES.contains(&token.text.as_str()) => {
                self.parse_declaration(token)
            }
            TokenKind::Keyword if HANDLE_TYPES.contains(&token.text.as_str()) => {
                self.parse_handle_declaration(token)
            }
            TokenKind::Identifier => self.parse_member_call(token),
            TokenKind::Keyword if token.text == "if" => self.parse_if(),
            TokenKind::Keyword if token.text == "while" => self.parse_while(),
            TokenKind::Keyword if token.text == "for" => self.parse_for(),
            _ => Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    text: token.text.clone(),
                },
                line: token.line,
            }),
        }
    }

    fn parse_declaration(&mut self, type_token: &Token) -> Result<Node, ParseError> {
        let mut identifiers = Vec::new();
        loop {
            let name = self.expect_kind(
                TokenKind::Identifier,
                "identifier in variable declaration",
            )?;
            identifiers.push(Identifier::new(&name.text));
            if !self.match_token(TokenKind::Punctuation, ",") {
                break;
            }
        }
        self.expect(
            TokenKind::Punctuation,
            ";",
            "';' at the end of variable declaration",
        )?;

        Ok(Node::Declaration {
            type_name: type_token.text.clone(),
            identifiers,
        })
    }

    fn parse_handle_declaration(&mut self, type_token: &Token) -> Result<Node, ParseError> {
        let name = self.expect_kind(
            TokenKind::Identifier,
            "identifier after file declaration keyword",
        )?;
        self.open(Bracket::Paren, "'(' after file declaration identifier")?;
        let path = self.expect_kind(TokenKind::Literal, "filename literal in file declaration")?;
        self.close(Bracket::Paren, "')' after filename literal in file declaration")?;
        self.expect(
            TokenKind::Punctuation,
            ";",
            "';' at the end of file declaration",
        )?;

        Ok(Node::HandleDeclaration {
            handle_type: type_token.text.clone(),
            name: Identifier::new(&name.text),
            path: path.text.clone(),
        })
    }

    fn parse_member_call(&mut self, target: &Token) -> Result<Node, ParseError> {
        self.expect(TokenKind::Operator, ".", "'.' after file identifier")?;
        let method = self.expect_kind(
            TokenKind::Identifier,
            "method name after '.' in file operation",
        )?;
        self.open(Bracket::Paren, "'(' after method name in file operation")?;
        self.close(Bracket::Paren, "')' in file operation")?;
        self.expect(
            TokenKind::Punctuation,
            ";",
            "';' at the end of file operation",
        )?;

        Ok(Node::MemberCall {
            target: Identifier::new(&target.text),
            method: method.text.clone(),
        })
    }

    fn parse_if(&mut self) -> Result<Node, ParseError> {
        self.open(Bracket::Paren, "'(' after 'if'")?;
        let condition = self.parse_expression()?;
        self.close(Bracket::Paren, "')' after condition in 'if' statement")?;
        let body = self.parse_block("'{' after 'if' condition")?;
        Ok(Node::If { condition, body })
    }

    fn parse_while(&mut self) -> Result<Node, ParseError> {
        self.open(Bracket::Paren, "'(' after 'while'")?;
        let condition = self.parse_expression()?;
        self.close(Bracket::Paren, "')' after condition in 'while' statement")?;
        let body = self.parse_block("'{' after 'while' condition")?;
        Ok(Node::WhileLoop { condition, body })
    }

    fn parse_for(&mut self) -> Result<Node, ParseError> {
        self.open(Bracket::Paren, "'(' after 'for'")?;
        let init = self.parse_expression()?;
        self.expect(
            TokenKind::Punctuation,
            ";",
            "';' after initialization in 'for' statement",
        )?;
        let condition = self.parse_expression()?;
        self.expect(
            TokenKind::Punctuation,
            ";",
            "';' after condition in 'for' statement",
        )?;
        let increment = self.parse_expression()?;
        self.close(Bracket::Paren, "')' after increment in 'for' statement")?;
        let body = self.parse_block("'{' after 'for' header")?;

        Ok(Node::ForLoop {
            init,
            condition,
            increment,
            body,
        })
    }

    /// `'{' Statement* '}'`. Running out of input inside the block is
    /// not an error here: the brace stays on the tracker and is
    /// reported once the whole token stream has been consumed.
    fn parse_block(&mut self, open_expected: &str) -> Result<Vec<Node>, ParseError> {
        self.open(Bracket::Brace, open_expected)?;
        if self.brackets.depth() > MAX_DEPTH {
            return Err(self.too_deep());
        }

        let mut body = Vec::new();
        while !self.is_at_end() {
            if self.match_token(TokenKind::Punctuation, "}") {
                self.pop_bracket(Bracket::Brace);
                return Ok(body);
            }
            body.push(self.parse_statement()?);
        }
        Ok(body)
    }

    /// Minimal expression: `'!' Expression`, or any single token,
    /// which yields no node. The `!` prefixes are counted first and
    /// wrapped around the empty operand afterwards.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut negations = 0;
        loop {
            let Some(token) = self.advance() else {
                return Err(self.expected("expression"));
            };
            if !token.is(TokenKind::Operator, "!") {
                break;
            }
            if negations == MAX_DEPTH {
                return Err(ParseError {
                    kind: ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH },
                    line: token.line,
                });
            }
            negations += 1;
        }

        Ok((0..negations).fold(None, |operand, _| {
            Some(Box::new(Node::UnaryOperation {
                operator: "!".to_string(),
                operand,
            }))
        }))
    }

    fn open(&mut self, bracket: Bracket, expected: &str) -> Result<(), ParseError> {
        let token = self.expect(TokenKind::Punctuation, bracket.open(), expected)?;
        self.brackets.push(bracket, token.line);
        Ok(())
    }

    fn close(&mut self, bracket: Bracket, expected: &str) -> Result<(), ParseError> {
        self.expect(TokenKind::Punctuation, bracket.close(), expected)?;
        self.pop_bracket(bracket);
        Ok(())
    }

    /// Every close the grammar accepts has a matching open on the
    /// tracker.
    fn pop_bracket(&mut self, bracket: Bracket) {
        let popped = self.brackets.pop(bracket);
        debug_assert!(
            popped.is_some(),
            "closing '{}' with no matching opener",
            bracket.close()
        );
    }

    /// Error for the brace that pushed nesting past `MAX_DEPTH`.
    fn too_deep(&self) -> ParseError {
        let line = self
            .brackets
            .innermost()
            .map_or_else(|| self.eof_line(), |(_, line)| line);
        ParseError {
            kind: ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH },
            line,
        }
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        text: &str,
        expected: &str,
    ) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.is(kind, text) => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.expected(expected)),
        }
    }

    fn expect_kind(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.expected(expected)),
        }
    }

    fn match_token(&mut self, kind: TokenKind, text: &str) -> bool {
        let matched = self.peek().is_some_and(|token| token.is(kind, text));
        if matched {
            self.pos += 1;
        }
        matched
    }

    fn expected(&self, expected: &str) -> ParseError {
        let (found, line) = self.peek().map_or_else(
            || (None, self.eof_line()),
            |token| (Some(token.text.clone()), token.line),
        );
        ParseError {
            kind: ParseErrorKind::ExpectedToken {
                expected: expected.to_string(),
                found,
            },
            line,
        }
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    const fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn eof_line(&self) -> usize {
        self.tokens.last().map_or(1, |last| last.line)
    }
}
