//! Programmatic ANSI art construction.
//!
//! [`AnsiBuilder`] appends already-safe fragments and never parses its own
//! output. Each primitive emits either a fixed whitelisted sequence or text
//! with control characters removed.

use ansiterm_ansi::codes::{cursor_position, sgr, CLEAR_SCREEN, CURSOR_HOME, RESET};
use ansiterm_ansi::{sanitize_for_terminal, CodePage};
use ansiterm_core::Result;
use ansiterm_sauce::{append_minimal, SauceOptions};

const FG_BASE: u32 = 30;
const BG_BASE: u32 = 40;
const BRIGHT_FG_BASE: u32 = 90;
const BRIGHT_BG_BASE: u32 = 100;

/// Replacement byte for characters CP437 cannot encode.
const LOSSY_REPLACEMENT: u8 = b'?';

/// Fluent builder for ANSI art.
///
/// # Example
///
/// ```
/// use ansiterm_render::AnsiBuilder;
///
/// let mut b = AnsiBuilder::new(80, 25);
/// b.clear().home().fg(7, true).bg(4, false).text("Hi").reset();
/// assert_eq!(b.to_text(), "\x1b[2J\x1b[H\x1b[97m\x1b[44mHi\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiBuilder {
    width: u16,
    height: u16,
    fragments: Vec<String>,
    fg: Option<u32>,
    bg: Option<u32>,
}

impl Default for AnsiBuilder {
    fn default() -> Self {
        Self::new(80, 25)
    }
}

impl AnsiBuilder {
    /// Create an empty builder for a `width` x `height` canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            fragments: Vec::new(),
            fg: None,
            bg: None,
        }
    }

    /// Canvas width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Append an SGR sequence.
    ///
    /// Color codes in `params` update the active colors seen by
    /// [`fg`](Self::fg) and [`bg`](Self::bg).
    pub fn sgr(&mut self, params: &[u32]) -> &mut Self {
        if params.is_empty() {
            self.fg = None;
            self.bg = None;
        }
        let mut iter = params.iter().copied();
        while let Some(code) = iter.next() {
            match code {
                0 => {
                    self.fg = None;
                    self.bg = None;
                }
                30..=37 | 90..=97 => self.fg = Some(code),
                40..=47 | 100..=107 => self.bg = Some(code),
                39 => self.fg = None,
                49 => self.bg = None,
                38 | 48 | 58 => {
                    if code == 38 {
                        self.fg = None;
                    } else if code == 48 {
                        self.bg = None;
                    }
                    // 5;n or 2;r;g;b operands are not codes of their own
                    let operands = match iter.next() {
                        Some(5) => 1,
                        Some(2) => 3,
                        _ => 0,
                    };
                    iter.by_ref().take(operands).for_each(drop);
                }
                _ => {}
            }
        }
        self.fragments.push(sgr(params));
        self
    }

    /// Move the cursor to a 1-based position.
    pub fn move_to(&mut self, row: u16, col: u16) -> &mut Self {
        self.fragments.push(cursor_position(row.max(1), col.max(1)));
        self
    }

    /// Clear the whole display.
    pub fn clear(&mut self) -> &mut Self {
        self.fragments.push(CLEAR_SCREEN.to_string());
        self
    }

    /// Move the cursor to the top-left corner.
    pub fn home(&mut self) -> &mut Self {
        self.fragments.push(CURSOR_HOME.to_string());
        self
    }

    /// Set the foreground to palette color `n` (0-7).
    ///
    /// Nothing is emitted if that color is already active.
    pub fn fg(&mut self, n: u8, bright: bool) -> &mut Self {
        let base = if bright { BRIGHT_FG_BASE } else { FG_BASE };
        let code = base + u32::from(n & 7);
        if self.fg != Some(code) {
            self.fg = Some(code);
            self.fragments.push(sgr(&[code]));
        }
        self
    }

    /// Set the background to palette color `n` (0-7).
    ///
    /// Nothing is emitted if that color is already active.
    pub fn bg(&mut self, n: u8, bright: bool) -> &mut Self {
        let base = if bright { BRIGHT_BG_BASE } else { BG_BASE };
        let code = base + u32::from(n & 7);
        if self.bg != Some(code) {
            self.bg = Some(code);
            self.fragments.push(sgr(&[code]));
        }
        self
    }

    /// Reset all attributes.
    pub fn reset(&mut self) -> &mut Self {
        self.fg = None;
        self.bg = None;
        self.fragments.push(RESET.to_string());
        self
    }

    /// Turn on bold (bright foreground on classic terminals).
    pub fn bold(&mut self) -> &mut Self {
        self.fragments.push(sgr(&[1]));
        self
    }

    /// Turn on faint intensity.
    pub fn dim(&mut self) -> &mut Self {
        self.fragments.push(sgr(&[2]));
        self
    }

    /// Append text with control characters other than `\n` and `\t` removed.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.fragments.push(sanitize_for_terminal(s));
        self
    }

    /// Append CP437 bytes as text.
    pub fn cp437(&mut self, bytes: &[u8]) -> &mut Self {
        let decoded = CodePage::Cp437.decode(bytes);
        self.text(&decoded)
    }

    /// Start a new line.
    pub fn newline(&mut self) -> &mut Self {
        self.fragments.push("\n".to_string());
        self
    }

    /// The art as Unicode text.
    pub fn to_text(&self) -> String {
        self.fragments.concat()
    }

    /// The art as CP437 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ansiterm_core::AnsitermError::Encoding`] for the first
    /// character CP437 cannot represent.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        CodePage::Cp437.encode(&self.to_text())
    }

    /// The art as CP437 bytes, with unencodable characters replaced by `?`.
    pub fn to_bytes_lossy(&self) -> Vec<u8> {
        CodePage::Cp437.encode_lossy(&self.to_text(), LOSSY_REPLACEMENT)
    }

    /// The art as CP437 bytes followed by a SAUCE record.
    ///
    /// The record's width and height come from the builder. Encoding is
    /// lossy; field length errors follow `options.strict`.
    pub fn to_bytes_with_sauce(&self, options: &SauceOptions) -> Result<Vec<u8>> {
        let options = SauceOptions {
            width: self.width,
            height: self.height,
            ..options.clone()
        };
        append_minimal(&self.to_bytes_lossy(), &options)
    }
}
