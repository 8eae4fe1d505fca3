//! Terminal output sanitization.
//!
//! [`SafetyFilter`] decides, per token, what may reach a real terminal.
//! Only a fixed whitelist of control kinds passes in safe mode; every
//! unrecognized sequence and every OSC/DCS/string sequence is dropped.

use std::borrow::Cow;

use ansiterm_core::{ControlKind, FilterDecision, IceMode, Token};
use log::debug;

use crate::ice::IceColorRewriter;

/// Sanitize a string for safe terminal output.
///
/// Removes control characters except newline and tab.
///
/// # Example
/// ```
/// use ansiterm_ansi::sanitize::sanitize_for_terminal;
///
/// let safe = sanitize_for_terminal("Hello\x1b[31mWorld");
/// assert_eq!(safe, "Hello[31mWorld"); // ESC removed
/// ```
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Whitelist-based filter over tokens, with iCE rewriting of SGR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyFilter {
    safe_mode: bool,
    ice: IceColorRewriter,
}

impl Default for SafetyFilter {
    fn default() -> Self {
        Self::new(true, IceMode::Auto)
    }
}

impl SafetyFilter {
    /// Create a filter.
    ///
    /// With `safe_mode` off every token passes, but SGR rewriting still
    /// follows `ice_mode`.
    pub fn new(safe_mode: bool, ice_mode: IceMode) -> Self {
        Self {
            safe_mode,
            ice: IceColorRewriter::new(ice_mode),
        }
    }

    /// Whether the whitelist is enforced.
    pub fn safe_mode(&self) -> bool {
        self.safe_mode
    }

    /// The iCE rewriter applied to SGR tokens.
    pub fn ice(&self) -> &IceColorRewriter {
        &self.ice
    }

    /// Decide what to do with one token.
    ///
    /// | Kind | Safe mode |
    /// |---|---|
    /// | Text | Pass |
    /// | SGR | Pass, or Rewrite when iCE applies |
    /// | CUP, CursorMove, CursorSave, EraseDisplay, EraseLine, PrivateMode | Pass |
    /// | Unknown (all OSC/DCS) | Drop |
    pub fn decide(&self, token: &Token<'_>) -> FilterDecision {
        let Token::Control(seq) = token else {
            return FilterDecision::Pass;
        };

        if seq.kind == ControlKind::Sgr {
            if let Some(replacement) = self.ice.rewrite(seq) {
                debug!("iCE rewrite {:?} -> {:?}", seq.raw, replacement);
                return FilterDecision::Rewrite(replacement);
            }
            return FilterDecision::Pass;
        }

        if !self.safe_mode {
            return FilterDecision::Pass;
        }

        if seq.kind.is_whitelisted() && !seq.family.is_string() {
            FilterDecision::Pass
        } else {
            debug!("Dropping {} {} sequence {:?}", seq.family, seq.kind, seq.raw);
            FilterDecision::Drop
        }
    }

    /// Apply the decision for `token`, returning the text to emit.
    pub fn apply<'a>(&self, token: &Token<'a>) -> Option<Cow<'a, str>> {
        match self.decide(token) {
            FilterDecision::Pass => Some(Cow::Borrowed(token.raw())),
            FilterDecision::Drop => None,
            FilterDecision::Rewrite(replacement) => Some(Cow::Owned(replacement)),
        }
    }
}
