//! ANSI escape code constants.
//!
//! This module provides the raw escape sequences the renderer and builder
//! emit. Every constant here is on the safe-mode whitelist.

/// Escape character.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// DOS end-of-file marker that conventionally precedes a SAUCE record.
pub const EOF_MARKER: u8 = 0x1a;

/// Bell, one of the two OSC terminators.
pub const BEL: char = '\x07';

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Switch to the alternate screen buffer.
pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

/// Leave the alternate screen buffer.
pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

/// Disable automatic line wrap.
pub const WRAP_OFF: &str = "\x1b[?7l";

/// Enable automatic line wrap.
pub const WRAP_ON: &str = "\x1b[?7h";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Move cursor to row 1, column 1.
pub const CURSOR_HOME: &str = "\x1b[H";

/// SGR code for blink, the bit iCE color repurposes.
pub const SGR_BLINK: u32 = 5;

/// First and last SGR codes of the normal background range.
pub const SGR_BG_NORMAL: std::ops::RangeInclusive<u32> = 40..=47;

/// Offset from a normal background code to its bright counterpart.
pub const SGR_BRIGHT_OFFSET: u32 = 60;

/// Format an SGR sequence from its parameters.
///
/// # Example
///
/// ```
/// use ansiterm_ansi::codes::sgr;
/// assert_eq!(sgr(&[1, 31]), "\x1b[1;31m");
/// assert_eq!(sgr(&[]), "\x1b[m");
/// ```
pub fn sgr(params: &[u32]) -> String {
    let joined = params
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("{CSI}{joined}m")
}

/// Format a cursor position sequence (1-based row and column).
///
/// # Example
///
/// ```
/// use ansiterm_ansi::codes::cursor_position;
/// assert_eq!(cursor_position(10, 20), "\x1b[10;20H");
/// ```
pub fn cursor_position(row: u16, col: u16) -> String {
    format!("{CSI}{row};{col}H")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgr_formatting() {
        assert_eq!(sgr(&[0]), RESET);
        assert_eq!(sgr(&[104]), "\x1b[104m");
        assert_eq!(sgr(&[38, 5, 196]), "\x1b[38;5;196m");
    }

    #[test]
    fn test_cursor_position() {
        assert_eq!(cursor_position(1, 1), "\x1b[1;1H");
    }

    #[test]
    fn test_bright_offset() {
        assert_eq!(SGR_BG_NORMAL.start() + SGR_BRIGHT_OFFSET, 100);
        assert_eq!(SGR_BG_NORMAL.end() + SGR_BRIGHT_OFFSET, 107);
    }
}
