//! Terminal capability queries and mode sequences.
//!
//! Capability queries only choose defaults; nothing in the pipeline
//! depends on them for correctness.

use ansiterm_ansi::codes::{
    ALT_SCREEN_OFF, ALT_SCREEN_ON, CLEAR_SCREEN, CURSOR_HIDE, CURSOR_HOME, CURSOR_SHOW, RESET,
    WRAP_OFF, WRAP_ON,
};
use ansiterm_config::RenderConfig;

/// Check if stdout is a terminal.
pub fn is_tty() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}

/// Get the terminal size.
///
/// Returns (columns, rows) or a default of (80, 25) if detection fails.
pub fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((80, 25))
}

/// Sequences written around rendered art.
///
/// `enter` is written before the art and `exit` after it, even when writing
/// the art fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerminalModes {
    /// Prelude: alternate screen, wrap off, cursor hidden, clear and home
    pub enter: String,
    /// Postlude: attribute reset and the inverse of each prelude mode
    pub exit: String,
}

impl TerminalModes {
    /// Build the prelude and postlude for the given switches.
    pub fn new(use_alt_screen: bool, disable_wrap: bool, hide_cursor: bool, clear_first: bool) -> Self {
        let mut enter = String::new();
        let mut exit = String::from(RESET);

        if use_alt_screen {
            enter.push_str(ALT_SCREEN_ON);
        }
        if disable_wrap {
            enter.push_str(WRAP_OFF);
        }
        if hide_cursor {
            enter.push_str(CURSOR_HIDE);
            exit.push_str(CURSOR_SHOW);
        }
        if clear_first {
            enter.push_str(CLEAR_SCREEN);
            enter.push_str(CURSOR_HOME);
        }
        if disable_wrap {
            exit.push_str(WRAP_ON);
        }
        if use_alt_screen {
            exit.push_str(ALT_SCREEN_OFF);
        }

        Self { enter, exit }
    }

    /// Modes derived from a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            config.use_alt_screen,
            config.disable_wrap,
            config.hide_cursor,
            config.clear_first,
        )
    }

    /// No prelude and no postlude.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_modes() {
        let modes = TerminalModes::new(true, true, true, true);
        assert_eq!(modes.enter, "\x1b[?1049h\x1b[?7l\x1b[?25l\x1b[2J\x1b[H");
        assert_eq!(modes.exit, "\x1b[0m\x1b[?25h\x1b[?7h\x1b[?1049l");
    }

    #[test]
    fn test_partial_modes() {
        let modes = TerminalModes::new(false, true, false, false);
        assert_eq!(modes.enter, "\x1b[?7l");
        assert_eq!(modes.exit, "\x1b[0m\x1b[?7h");
    }

    #[test]
    fn test_none() {
        let modes = TerminalModes::none();
        assert!(modes.enter.is_empty());
        assert!(modes.exit.is_empty());
    }

    #[test]
    fn test_from_default_config() {
        let modes = TerminalModes::from_config(&RenderConfig::default());
        assert_eq!(modes, TerminalModes::new(true, true, true, true));
    }
}
