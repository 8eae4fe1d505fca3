//! CP437 code page conversion.
//!
//! The IBM PC code page is fully defined over all 256 byte values, so
//! decoding is total. Bytes `0x00..=0x7F` map to the identical code points,
//! which keeps escape sequences intact through decoding. Encoding fails for
//! characters outside the page.

use std::collections::HashMap;
use std::sync::LazyLock;

use ansiterm_core::{AnsitermError, Result};

/// Code points for bytes `0x80..=0xFF`.
const CP437_HIGH: [char; 128] = [
    // 0x80
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E5}', '\u{00E7}',
    '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00EC}', '\u{00C4}', '\u{00C5}',
    // 0x90
    '\u{00C9}', '\u{00E6}', '\u{00C6}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00FB}', '\u{00F9}',
    '\u{00FF}', '\u{00D6}', '\u{00DC}', '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{20A7}', '\u{0192}',
    // 0xA0
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}',
    '\u{00BF}', '\u{2310}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}',
    // 0xB0
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}',
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{255C}', '\u{255B}', '\u{2510}',
    // 0xC0
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{255E}', '\u{255F}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{2567}',
    // 0xD0
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256B}',
    '\u{256A}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{258C}', '\u{2590}', '\u{2580}',
    // 0xE0
    '\u{03B1}', '\u{00DF}', '\u{0393}', '\u{03C0}', '\u{03A3}', '\u{03C3}', '\u{00B5}', '\u{03C4}',
    '\u{03A6}', '\u{0398}', '\u{03A9}', '\u{03B4}', '\u{221E}', '\u{03C6}', '\u{03B5}', '\u{2229}',
    // 0xF0
    '\u{2261}', '\u{00B1}', '\u{2265}', '\u{2264}', '\u{2320}', '\u{2321}', '\u{00F7}', '\u{2248}',
    '\u{00B0}', '\u{2219}', '\u{00B7}', '\u{221A}', '\u{207F}', '\u{00B2}', '\u{25A0}', '\u{00A0}',
];

/// Reverse lookup for the upper half of the page.
static CP437_REVERSE: LazyLock<HashMap<char, u8>> = LazyLock::new(|| {
    CP437_HIGH
        .iter()
        .zip(0x80u8..=0xFF)
        .map(|(&c, b)| (c, b))
        .collect()
});

/// A supported legacy single-byte code page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodePage {
    /// IBM PC code page 437
    #[default]
    Cp437,
}

impl CodePage {
    /// Resolve a code page from a configuration name.
    ///
    /// Accepts `cp437`, `ibm437`, `ibm-437`, and `437`, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cp437" | "ibm437" | "ibm-437" | "437" => Ok(CodePage::Cp437),
            _ => Err(AnsitermError::UnsupportedCodec(name.to_string())),
        }
    }

    /// Canonical name of this code page.
    pub fn name(&self) -> &'static str {
        match self {
            CodePage::Cp437 => "cp437",
        }
    }

    /// Decode a single byte.
    pub fn decode_byte(&self, byte: u8) -> char {
        match self {
            CodePage::Cp437 => {
                if byte < 0x80 {
                    char::from(byte)
                } else {
                    CP437_HIGH[usize::from(byte - 0x80)]
                }
            }
        }
    }

    /// Encode a single character, if the page can represent it.
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        match self {
            CodePage::Cp437 => {
                if ch.is_ascii() {
                    Some(ch as u8)
                } else {
                    CP437_REVERSE.get(&ch).copied()
                }
            }
        }
    }

    /// Decode bytes to text. Never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use ansiterm_ansi::CodePage;
    /// assert_eq!(CodePage::Cp437.decode(b"\xb0\xb1\xb2\xdb"), "░▒▓█");
    /// ```
    pub fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.decode_byte(b)).collect()
    }

    /// Encode text to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AnsitermError::Encoding`] for the first character that has
    /// no representation in this page.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        text.chars()
            .enumerate()
            .map(|(position, ch)| {
                self.encode_char(ch)
                    .ok_or(AnsitermError::Encoding { ch, position })
            })
            .collect()
    }

    /// Encode text, substituting `replacement` for unrepresentable characters.
    pub fn encode_lossy(&self, text: &str, replacement: u8) -> Vec<u8> {
        text.chars()
            .map(|ch| self.encode_char(ch).unwrap_or(replacement))
            .collect()
    }
}

impl std::fmt::Display for CodePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
