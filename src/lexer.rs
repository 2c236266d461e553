use log::trace;

use crate::token::{Token, TokenKind};

/// Reserved words. Earlier entries win, so `ifstream` is listed
/// before `if`.
pub const KEYWORDS: &[&str] = &[
    "std", "ifstream", "ofstream", "fstream", "string", "while", "if", "else", "return", "int",
    "for",
];

/// Operators, multi-character forms first.
pub const OPERATORS: &[&str] = &[
    "::", ".", "<<", ">>", "&&", "||", "++", "--", "<=", ">=", "==", "!=", "+=", "-=", "*=", "/=",
    "+", "-", "*", "/", "%", "<", ">", "=", "!",
];

/// Single-character punctuation. `<` and `>` are shadowed by the
/// operator rule, which is tried first.
pub const PUNCTUATION: &[u8] = b";(){}<>[],";

/// Lexical rules in the order they are tried at each position.
/// The first rule that matches wins, even when a later one would
/// consume more input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuation,
    Whitespace,
    Newline,
}

const RULES: [Rule; 7] = [
    Rule::Keyword,
    Rule::Identifier,
    Rule::Literal,
    Rule::Operator,
    Rule::Punctuation,
    Rule::Whitespace,
    Rule::Newline,
];

impl Rule {
    /// Length in bytes of the match at the start of `rest`, if any.
    fn match_len(self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        match self {
            Self::Keyword => KEYWORDS
                .iter()
                .find(|kw| rest.starts_with(*kw))
                .map(|kw| kw.len()),
            Self::Identifier => {
                let first = *bytes.first()?;
                if !(first.is_ascii_alphabetic() || first == b'_') {
                    return None;
                }
                let len = bytes
                    .iter()
                    .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                    .count();
                Some(len)
            }
            Self::Literal => {
                if bytes.first() != Some(&b'"') {
                    return None;
                }
                // Non-greedy, and never across a line break.
                let end = bytes[1..].iter().position(|b| *b == b'"' || *b == b'\n')?;
                (bytes[1 + end] == b'"').then_some(end + 2)
            }
            Self::Operator => OPERATORS
                .iter()
                .find(|op| rest.starts_with(*op))
                .map(|op| op.len()),
            Self::Punctuation => {
                let first = bytes.first()?;
                PUNCTUATION.contains(first).then_some(1)
            }
            Self::Whitespace => {
                let len = bytes
                    .iter()
                    .take_while(|b| matches!(b, b' ' | b'\t' | b'\r'))
                    .count();
                (len > 0).then_some(len)
            }
            Self::Newline => (bytes.first() == Some(&b'\n')).then_some(1),
        }
    }

    /// Token kind emitted for this rule, `None` for skipped input.
    const fn kind(self) -> Option<TokenKind> {
        match self {
            Self::Keyword => Some(TokenKind::Keyword),
            Self::Identifier => Some(TokenKind::Identifier),
            Self::Literal => Some(TokenKind::Literal),
            Self::Operator => Some(TokenKind::Operator),
            Self::Punctuation => Some(TokenKind::Punctuation),
            Self::Whitespace | Self::Newline => None,
        }
    }
}

/// Tokenize source text into a sequence of tokens.
///
/// Never fails: a character no rule accepts becomes a single
/// `Unknown` token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];
            let matched = RULES
                .iter()
                .find_map(|rule| rule.match_len(rest).map(|len| (*rule, len)));

            match matched {
                Some((Rule::Newline, len)) => {
                    self.pos += len;
                    self.line += 1;
                }
                Some((rule, len)) => {
                    if let Some(kind) = rule.kind() {
                        tokens.push(self.make_token(kind, &rest[..len]));
                    }
                    self.pos += len;
                }
                None => {
                    let len = rest.chars().next().map_or(1, char::len_utf8);
                    tokens.push(self.make_token(TokenKind::Unknown, &rest[..len]));
                    self.pos += len;
                }
            }
        }

        tokens
    }

    fn make_token(&self, kind: TokenKind, text: &str) -> Token {
        trace!("line {}: {kind} {text:?}", self.line);
        Token::new(kind, text, self.line)
    }
}
