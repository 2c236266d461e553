//! Open-bracket bookkeeping used for mismatch diagnostics.

use std::fmt;

use log::trace;

/// Bracket kinds the parser tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(`
    Paren,
    /// `{`
    Brace,
}

impl Bracket {
    /// Opening character.
    #[must_use]
    pub const fn open(self) -> &'static str {
        match self {
            Self::Paren => "(",
            Self::Brace => "{",
        }
    }

    /// Matching closing character.
    #[must_use]
    pub const fn close(self) -> &'static str {
        match self {
            Self::Paren => ")",
            Self::Brace => "}",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.open())
    }
}

/// Two synchronized stacks: open brackets and the lines they
/// appeared on. Both stacks always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketTracker {
    openers: Vec<Bracket>,
    lines: Vec<usize>,
}

impl BracketTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            openers: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Record an opener consumed on `line`.
    pub fn push(&mut self, bracket: Bracket, line: usize) {
        trace!("push {bracket} from line {line}");
        self.openers.push(bracket);
        self.lines.push(line);
    }

    /// Pop the innermost opener if it is `expected`.
    ///
    /// Returns `None` and leaves the stacks untouched when empty or
    /// when the top entry is a different bracket kind.
    pub fn pop(&mut self, expected: Bracket) -> Option<(Bracket, usize)> {
        if self.openers.last() != Some(&expected) {
            return None;
        }
        let bracket = self.openers.pop()?;
        let line = self.lines.pop()?;
        trace!("pop {bracket} from line {line}");
        Some((bracket, line))
    }

    /// Innermost still-open bracket and its line.
    #[must_use]
    pub fn innermost(&self) -> Option<(Bracket, usize)> {
        Some((*self.openers.last()?, *self.lines.last()?))
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.openers.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.openers.is_empty()
    }
}
