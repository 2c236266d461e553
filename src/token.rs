use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word (`int`, `while`, `ifstream`, ...).
    Keyword,
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword prefix.
    Identifier,
    /// Double-quoted string, quotes included.
    Literal,
    /// Operator such as `::`, `<<`, `++` or `!`.
    Operator,
    /// Single punctuation character (`;`, `(`, `{`, `,`, ...).
    Punctuation,
    /// Any character no other rule accepts.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Literal => "literal",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, text, and 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// True when both the kind and the literal text match.
    #[must_use]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}
