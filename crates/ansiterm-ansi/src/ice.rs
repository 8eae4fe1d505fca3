//! iCE color rewriting.
//!
//! BBS art used the blink attribute bit to select bright backgrounds. Modern
//! terminals either blink or ignore it, so SGR sequences combining blink
//! (`5`) with a normal background (`40`-`47`) are rewritten to the bright
//! background family (`100`-`107`) with the blink dropped.

use ansiterm_core::{ControlKind, ControlSequence, IceMode};

use crate::codes::{sgr, SGR_BG_NORMAL, SGR_BLINK, SGR_BRIGHT_OFFSET};

/// Mark parameters that are sub-parameters of an extended color.
///
/// In `38;5;44` the `44` is a palette index, not a background code.
fn sub_parameter_mask(params: &[u32]) -> Vec<bool> {
    let mut mask = vec![false; params.len()];
    let mut i = 0;
    while i < params.len() {
        let extra = match params[i] {
            38 | 48 | 58 => match params.get(i + 1) {
                Some(5) => 2,
                Some(2) => 4,
                _ => 0,
            },
            _ => 0,
        };
        let end = (i + 1 + extra).min(params.len());
        for flag in &mut mask[i + 1..end] {
            *flag = true;
        }
        i = end;
    }
    mask
}

/// Iterate over the plain SGR codes, skipping extended-color operands.
fn plain_codes(params: &[u32]) -> impl Iterator<Item = u32> + '_ {
    params
        .iter()
        .zip(sub_parameter_mask(params))
        .filter(|(_, sub)| !sub)
        .map(|(&p, _)| p)
}

/// Check if SGR parameters carry the legacy blink + background pattern.
///
/// # Example
///
/// ```
/// use ansiterm_ansi::ice::is_ice_pattern;
/// assert!(is_ice_pattern(&[0, 5, 44]));
/// assert!(!is_ice_pattern(&[44]));
/// assert!(!is_ice_pattern(&[5, 38, 5, 44]));
/// ```
pub fn is_ice_pattern(params: &[u32]) -> bool {
    let mut blink = false;
    let mut background = false;
    for code in plain_codes(params) {
        blink |= code == SGR_BLINK;
        background |= SGR_BG_NORMAL.contains(&code);
    }
    blink && background
}

/// Rewrites SGR sequences according to an [`IceMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IceColorRewriter {
    mode: IceMode,
}

impl IceColorRewriter {
    /// Create a rewriter for the given mode.
    pub fn new(mode: IceMode) -> Self {
        Self { mode }
    }

    /// The active mode.
    pub fn mode(&self) -> IceMode {
        self.mode
    }

    /// Compute rewritten parameters, or `None` when the rule does not apply.
    ///
    /// Parameters unrelated to blink or background keep their order.
    pub fn rewrite_params(&self, params: &[u32]) -> Option<Vec<u32>> {
        let triggered = match self.mode {
            IceMode::Off => false,
            IceMode::Auto => is_ice_pattern(params),
            IceMode::On => plain_codes(params).any(|code| SGR_BG_NORMAL.contains(&code)),
        };
        if !triggered {
            return None;
        }

        let mask = sub_parameter_mask(params);
        let rewritten = params
            .iter()
            .zip(mask)
            .filter_map(|(&p, sub)| {
                if sub {
                    Some(p)
                } else if p == SGR_BLINK {
                    None
                } else if SGR_BG_NORMAL.contains(&p) {
                    Some(p + SGR_BRIGHT_OFFSET)
                } else {
                    Some(p)
                }
            })
            .collect();
        Some(rewritten)
    }

    /// Rewrite an SGR control sequence, returning the replacement text.
    ///
    /// Returns `None` for non-SGR sequences and when no rewrite applies, in
    /// which case the original bytes should be emitted unchanged.
    pub fn rewrite(&self, seq: &ControlSequence<'_>) -> Option<String> {
        if seq.kind != ControlKind::Sgr {
            return None;
        }
        self.rewrite_params(&seq.params).map(|params| sgr(&params))
    }
}
