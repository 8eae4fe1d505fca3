//! Stream analysis.
//!
//! Tokenizes decoded art without filtering and simulates a cursor to
//! estimate the canvas the art needs.

use std::path::Path;

use ansiterm_ansi::ice::is_ice_pattern;
use ansiterm_ansi::CodePage;
use ansiterm_core::{ControlKind, ControlSequence, Result, Token};
use ansiterm_parser::tokenize;
use ansiterm_sauce::SauceRecord;
use log::debug;
use unicode_width::UnicodeWidthChar;

/// Width suggested when the art fits a classic screen.
pub const DEFAULT_WIDTH: usize = 80;

/// Height suggested when the art fits a classic screen.
pub const DEFAULT_HEIGHT: usize = 25;

const TAB_STOP: usize = 8;

/// Descriptive summary of one piece of art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// A SAUCE record was present
    pub has_sauce: bool,
    /// Some SGR carried both blink and a normal background
    pub uses_ice: bool,
    /// Some CUP or relative cursor move occurred
    pub has_cup: bool,
    /// Estimated columns used
    pub est_cols: usize,
    /// Estimated rows used
    pub est_rows: usize,
    /// Suggested canvas width, at least [`DEFAULT_WIDTH`]
    pub suggested_width: usize,
    /// Suggested canvas height, at least [`DEFAULT_HEIGHT`]
    pub suggested_height: usize,
    /// The parsed SAUCE record, if any
    pub sauce: Option<SauceRecord>,
}

/// Cursor-simulating accumulator over a token stream.
#[derive(Debug, Clone, Default)]
pub struct StreamAnalyzer {
    wrap: Option<usize>,
    row: usize,
    col: usize,
    saved: Option<(usize, usize)>,
    max_cols: usize,
    max_rows: usize,
    uses_ice: bool,
    has_cup: bool,
}

impl StreamAnalyzer {
    /// Create an analyzer; `wrap` is the column at which text wraps.
    pub fn new(wrap: Option<usize>) -> Self {
        Self {
            wrap: wrap.filter(|&w| w > 0),
            ..Self::default()
        }
    }

    /// Account for one token.
    pub fn feed(&mut self, token: &Token<'_>) {
        match token {
            Token::Text(text) => text.chars().for_each(|c| self.put_char(c)),
            Token::Control(seq) => self.control(seq),
        }
    }

    /// Account for every token of `text`.
    pub fn feed_text(&mut self, text: &str) {
        for token in tokenize(text) {
            self.feed(&token);
        }
    }

    /// Finish the pass and produce the summary.
    pub fn finish(self, sauce: Option<SauceRecord>) -> Analysis {
        Analysis {
            has_sauce: sauce.is_some(),
            uses_ice: self.uses_ice,
            has_cup: self.has_cup,
            est_cols: self.max_cols,
            est_rows: self.max_rows,
            suggested_width: self.max_cols.max(DEFAULT_WIDTH),
            suggested_height: self.max_rows.max(DEFAULT_HEIGHT),
            sauce,
        }
    }

    fn mark(&mut self) {
        self.max_rows = self.max_rows.max(self.row.saturating_add(1));
    }

    fn put_char(&mut self, c: char) {
        match c {
            '\n' => {
                self.row = self.row.saturating_add(1);
                self.col = 0;
            }
            '\r' => self.col = 0,
            '\t' => {
                self.col = (self.col / TAB_STOP + 1).saturating_mul(TAB_STOP);
                if let Some(wrap) = self.wrap {
                    self.col = self.col.min(wrap);
                }
            }
            c if c.is_control() => {}
            c => {
                let width = c.width().unwrap_or(0);
                if width == 0 {
                    return;
                }
                if let Some(wrap) = self.wrap {
                    if self.col.saturating_add(width) > wrap {
                        self.row = self.row.saturating_add(1);
                        self.col = 0;
                    }
                }
                self.col = self.col.saturating_add(width);
                self.max_cols = self.max_cols.max(self.col);
                self.mark();
            }
        }
    }

    fn control(&mut self, seq: &ControlSequence<'_>) {
        match seq.kind {
            ControlKind::Sgr => {
                if is_ice_pattern(&seq.params) {
                    self.uses_ice = true;
                }
            }
            ControlKind::Cup => {
                self.has_cup = true;
                self.row = seq.param_or(0, 1) as usize - 1;
                self.col = seq.param_or(1, 1) as usize - 1;
                self.max_cols = self.max_cols.max(self.col.saturating_add(1));
                self.mark();
            }
            ControlKind::CursorMove => {
                self.has_cup = true;
                let n = seq.param_or(0, 1) as usize;
                match seq.final_byte {
                    Some(b'A') => self.row = self.row.saturating_sub(n),
                    Some(b'B') => self.row = self.row.saturating_add(n),
                    Some(b'C') => self.col = self.col.saturating_add(n),
                    Some(b'D') => self.col = self.col.saturating_sub(n),
                    _ => {}
                }
                if let Some(wrap) = self.wrap {
                    self.col = self.col.min(wrap);
                }
            }
            ControlKind::CursorSave => match seq.final_byte {
                Some(b's') => self.saved = Some((self.row, self.col)),
                Some(b'u') => {
                    if let Some((row, col)) = self.saved {
                        self.row = row;
                        self.col = col;
                    }
                }
                _ => {}
            },
            // ANSI.SYS homes the cursor on a full clear
            ControlKind::EraseDisplay if seq.param_or(0, 0) == 2 => {
                self.row = 0;
                self.col = 0;
            }
            _ => {}
        }
    }
}

/// Analyze decoded text, wrapping at `wrap` columns when given.
pub fn analyze_text(text: &str, wrap: Option<usize>) -> Analysis {
    let mut analyzer = StreamAnalyzer::new(wrap);
    analyzer.feed_text(text);
    analyzer.finish(None)
}

/// Analyze raw art bytes, honoring any SAUCE record.
pub fn analyze_bytes(data: &[u8]) -> Analysis {
    let sauce = ansiterm_sauce::read(data);
    let wrap = sauce.as_ref().and_then(SauceRecord::width).map(usize::from);
    let text = CodePage::Cp437.decode(ansiterm_sauce::strip(data));

    let mut analyzer = StreamAnalyzer::new(wrap);
    analyzer.feed_text(&text);
    let analysis = analyzer.finish(sauce);
    debug!(
        "Analyzed {} bytes: {}x{} (sauce={}, ice={}, cup={})",
        data.len(),
        analysis.est_cols,
        analysis.est_rows,
        analysis.has_sauce,
        analysis.uses_ice,
        analysis.has_cup
    );
    analysis
}

/// Read and analyze a file.
///
/// # Errors
///
/// Returns [`ansiterm_core::AnsitermError::Io`] if the file cannot be read.
pub fn analyze_file(path: &Path) -> Result<Analysis> {
    let data = std::fs::read(path)?;
    Ok(analyze_bytes(&data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansiterm_sauce::{append_minimal, SauceOptions};

    fn block(cols: usize, rows: usize) -> String {
        vec!["#".repeat(cols); rows].join("\n")
    }

    #[test]
    fn test_plain_block() {
        let analysis = analyze_bytes(block(90, 30).as_bytes());
        assert!(!analysis.has_sauce);
        assert!(!analysis.uses_ice);
        assert!(!analysis.has_cup);
        assert_eq!((analysis.est_cols, analysis.est_rows), (90, 30));
        assert_eq!((analysis.suggested_width, analysis.suggested_height), (90, 30));
    }

    #[test]
    fn test_small_art_suggests_defaults() {
        let analysis = analyze_text("hi\nthere\n", None);
        assert_eq!((analysis.est_cols, analysis.est_rows), (5, 2));
        assert_eq!((analysis.suggested_width, analysis.suggested_height), (80, 25));
    }

    #[test]
    fn test_empty() {
        let analysis = analyze_text("", None);
        assert_eq!((analysis.est_cols, analysis.est_rows), (0, 0));
        assert_eq!(analysis.suggested_width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_cup_target_counts() {
        let analysis = analyze_text("\x1b[40;100H", None);
        assert!(analysis.has_cup);
        assert_eq!((analysis.est_cols, analysis.est_rows), (100, 40));
    }

    #[test]
    fn test_cursor_move() {
        let analysis = analyze_text("ab\x1b[10Cc", None);
        assert!(analysis.has_cup);
        assert_eq!(analysis.est_cols, 13);
    }

    #[test]
    fn test_ice_detected() {
        assert!(analyze_text("\x1b[5;44mX", None).uses_ice);
        assert!(!analyze_text("\x1b[44mX", None).uses_ice);
    }

    #[test]
    fn test_wrap() {
        let analysis = analyze_text(&"x".repeat(25), Some(10));
        assert_eq!((analysis.est_cols, analysis.est_rows), (10, 3));
    }

    #[test]
    fn test_tab_and_cr() {
        let analysis = analyze_text("a\tb\rc", None);
        assert_eq!(analysis.est_cols, 9);
        assert_eq!(analysis.est_rows, 1);
    }

    #[test]
    fn test_save_restore() {
        let analysis = analyze_text("abc\x1b[s\n\n\x1b[ud", None);
        assert_eq!((analysis.est_cols, analysis.est_rows), (4, 1));
    }

    #[test]
    fn test_wide_chars() {
        assert_eq!(analyze_text("日本", None).est_cols, 4);
    }

    #[test]
    fn test_row_saturates_at_edge() {
        let mut analyzer = StreamAnalyzer::new(Some(2));
        analyzer.row = usize::MAX;
        analyzer.feed_text("\nabc\n");
        let analysis = analyzer.finish(None);
        assert_eq!(analysis.est_rows, usize::MAX);
        assert_eq!(analysis.est_cols, 2);
    }

    #[test]
    fn test_sauce_width_wraps() {
        let options = SauceOptions {
            width: 40,
            ..SauceOptions::default()
        };
        let data = append_minimal("x".repeat(100).as_bytes(), &options).unwrap();
        let analysis = analyze_bytes(&data);
        assert!(analysis.has_sauce);
        assert_eq!((analysis.est_cols, analysis.est_rows), (40, 3));
        assert_eq!(analysis.sauce.and_then(|s| s.width()), Some(40));
    }
}
