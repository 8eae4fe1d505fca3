//! Ansiterm Parser
//!
//! A fail-safe tokenizer that splits decoded ANSI art into text runs and
//! classified control sequences.
//!
//! # Overview
//!
//! The tokenizer is a lazy, single-pass iterator. It never fails: truncated
//! or malformed escape sequences come out as [`ControlKind::Unknown`] tokens
//! holding exactly the bytes consumed, so the raw text of every token, in
//! order, reproduces the input.
//!
//! # Example
//!
//! ```
//! use ansiterm_parser::{tokenize, ControlKind, Token};
//!
//! let tokens: Vec<Token> = tokenize("Hello \x1b[31mWorld").collect();
//! assert_eq!(tokens[0], Token::Text("Hello "));
//! assert_eq!(tokens[1].as_control().unwrap().kind, ControlKind::Sgr);
//! assert_eq!(tokens[2], Token::Text("World"));
//! ```

pub mod tokenizer;

pub use ansiterm_core::{ControlKind, ControlSequence, SequenceFamily, Token};
pub use tokenizer::{tokenize, Tokenizer};
