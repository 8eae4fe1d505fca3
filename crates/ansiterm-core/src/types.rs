//! Token types shared by the tokenizer, filter, and analyzer.
//!
//! Tokens borrow from the decoded input they were scanned from, so the
//! concatenation of every token's [`Token::raw`] is the input itself.

use crate::enums::{ControlKind, SequenceFamily};

/// One classified piece of an input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of text containing no escape byte
    Text(&'a str),
    /// A recognized or unrecognized escape sequence
    Control(ControlSequence<'a>),
}

impl<'a> Token<'a> {
    /// The exact input slice this token was produced from.
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Text(content) => content,
            Token::Control(seq) => seq.raw,
        }
    }

    /// Check if this token is a text run.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// The control sequence, if this token is one.
    pub fn as_control(&self) -> Option<&ControlSequence<'a>> {
        match self {
            Token::Control(seq) => Some(seq),
            Token::Text(_) => None,
        }
    }
}

/// A single escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSequence<'a> {
    /// Classified kind
    pub kind: ControlKind,
    /// Introducer family
    pub family: SequenceFamily,
    /// Exact input slice, starting at the escape character
    pub raw: &'a str,
    /// Numeric parameters in order; empty fields are 0
    pub params: Vec<u32>,
    /// Parameter string began with the `?` private marker
    pub private: bool,
    /// Final byte, absent for truncated sequences and string families
    pub final_byte: Option<u8>,
}

impl ControlSequence<'_> {
    /// Get parameter `index`, substituting `default` when it is missing or 0.
    ///
    /// This is the ECMA-48 reading of cursor parameters, where 0 and an
    /// omitted value both mean the default.
    pub fn param_or(&self, index: usize, default: u32) -> u32 {
        match self.params.get(index) {
            Some(0) | None => default,
            Some(&n) => n,
        }
    }

    /// Check if this is a parameterless CUP (cursor home).
    pub fn is_home(&self) -> bool {
        self.kind == ControlKind::Cup && self.params.is_empty()
    }
}

/// Verdict of the safety filter for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// Emit the token's raw text unchanged
    Pass,
    /// Emit nothing
    Drop,
    /// Emit this replacement instead of the raw text
    Rewrite(String),
}
