//! Byte-level escape-sequence tokenizer.
//!
//! CSI parsing follows the ECMA-48 byte classes: parameter bytes
//! `0x30..=0x3F`, intermediate bytes `0x20..=0x2F`, and one final byte
//! `0x40..=0x7E`. A byte outside those classes ends the sequence early and
//! is left for the next token.

use ansiterm_core::{ControlKind, ControlSequence, SequenceFamily, Token};

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// Check if a byte is a CSI parameter byte.
fn is_parameter(b: u8) -> bool {
    (0x30..=0x3f).contains(&b)
}

/// Check if a byte is a CSI intermediate byte.
fn is_intermediate(b: u8) -> bool {
    (0x20..=0x2f).contains(&b)
}

/// Check if a byte is a CSI final byte.
fn is_final(b: u8) -> bool {
    (0x40..=0x7e).contains(&b)
}

/// Parse a `[0-9;]*` parameter string. Empty fields are 0; values saturate.
fn parse_params(s: &str) -> Vec<u32> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(';')
        .map(|field| {
            field.bytes().fold(0u32, |acc, d| {
                acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
            })
        })
        .collect()
}

/// Lazy iterator of [`Token`]s over decoded text.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

/// Tokenize `input`.
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(input)
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn unknown(&self, family: SequenceFamily, start: usize, end: usize) -> ControlSequence<'a> {
        ControlSequence {
            kind: ControlKind::Unknown,
            family,
            raw: &self.input[start..end],
            params: Vec::new(),
            private: false,
            final_byte: None,
        }
    }

    /// Scan an escape sequence starting at `start` (which holds ESC).
    fn scan_escape(&self, start: usize) -> (ControlSequence<'a>, usize) {
        let bytes = self.bytes();
        let Some(&introducer) = bytes.get(start + 1) else {
            return (self.unknown(SequenceFamily::Escape, start, start + 1), start + 1);
        };

        match introducer {
            b'[' => self.scan_csi(start),
            b']' => self.scan_string(start, SequenceFamily::Osc),
            b'P' => self.scan_string(start, SequenceFamily::Dcs),
            b'X' | b'^' | b'_' => self.scan_string(start, SequenceFamily::String),
            // A second ESC starts its own sequence.
            ESC => (self.unknown(SequenceFamily::Escape, start, start + 1), start + 1),
            _ => {
                let width = self.input[start + 1..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                let end = start + 1 + width;
                (self.unknown(SequenceFamily::Escape, start, end), end)
            }
        }
    }

    fn scan_csi(&self, start: usize) -> (ControlSequence<'a>, usize) {
        let bytes = self.bytes();
        let mut i = start + 2;

        let private = bytes.get(i) == Some(&b'?');
        if private {
            i += 1;
        }

        let param_start = i;
        while i < bytes.len() && is_parameter(bytes[i]) {
            i += 1;
        }
        let param_end = i;
        while i < bytes.len() && is_intermediate(bytes[i]) {
            i += 1;
        }

        let Some(&final_byte) = bytes.get(i).filter(|&&b| is_final(b)) else {
            // Truncated or interrupted: keep what was consumed.
            return (self.unknown(SequenceFamily::Csi, start, i), i);
        };
        let end = i + 1;

        let param_str = &self.input[param_start..param_end];
        let well_formed = param_end == i
            && param_str.bytes().all(|b| b.is_ascii_digit() || b == b';');

        let (kind, params) = if well_formed {
            (
                ControlKind::from_csi_final(final_byte, private),
                parse_params(param_str),
            )
        } else {
            (ControlKind::Unknown, Vec::new())
        };

        let seq = ControlSequence {
            kind,
            family: SequenceFamily::Csi,
            raw: &self.input[start..end],
            params,
            private,
            final_byte: Some(final_byte),
        };
        (seq, end)
    }

    /// Scan an OSC/DCS/string sequence up to BEL or ST (`ESC \`).
    ///
    /// An ESC that does not form ST aborts the string without being
    /// consumed. A missing terminator consumes the rest of the input.
    fn scan_string(&self, start: usize, family: SequenceFamily) -> (ControlSequence<'a>, usize) {
        let bytes = self.bytes();
        let mut i = start + 2;
        while i < bytes.len() {
            match bytes[i] {
                BEL => return (self.unknown(family, start, i + 1), i + 1),
                ESC if bytes.get(i + 1) == Some(&b'\\') => {
                    return (self.unknown(family, start, i + 2), i + 2);
                }
                ESC => return (self.unknown(family, start, i), i),
                _ => i += 1,
            }
        }
        (self.unknown(family, start, bytes.len()), bytes.len())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        if bytes[start] == ESC {
            let (seq, end) = self.scan_escape(start);
            self.pos = end;
            return Some(Token::Control(seq));
        }

        let end = bytes[start..]
            .iter()
            .position(|&b| b == ESC)
            .map_or(bytes.len(), |n| start + n);
        self.pos = end;
        Some(Token::Text(&self.input[start..end]))
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}
