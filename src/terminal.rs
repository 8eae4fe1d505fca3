//! Host terminal setup and key waiting.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::debug;

/// Prepare the host terminal for ANSI output.
///
/// Called once before anything is rendered. Enables virtual terminal
/// processing on Windows; a no-op elsewhere.
pub fn init() {
    #[cfg(windows)]
    {
        let supported = crossterm::ansi_support::supports_ansi();
        debug!("ANSI support enabled: {}", supported);
    }
    #[cfg(not(windows))]
    debug!("Terminal init: nothing to do");
}

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// What the user pressed while we waited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWait {
    Continue,
    Quit,
}

fn classify(key: &KeyEvent) -> Option<KeyWait> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(KeyWait::Continue),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyWait::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyWait::Quit),
        _ => None,
    }
}

/// Block until Enter (continue) or Ctrl+C, `q`, Esc (quit).
///
/// The terminal is in raw mode while waiting, so Ctrl+C arrives as a key.
pub fn wait_for_key() -> io::Result<KeyWait> {
    let _raw = RawModeGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(wait) = classify(&key) {
                return Ok(wait);
            }
        }
    }
}
