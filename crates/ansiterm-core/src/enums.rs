//! Core enums for escape-sequence classification.
//!
//! These enums are closed: every final byte the tokenizer understands maps
//! to exactly one [`ControlKind`], and anything else is [`ControlKind::Unknown`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of a control sequence, derived from its introducer and final byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// Select Graphic Rendition (`CSI ... m`)
    Sgr,
    /// Cursor position (`CSI row;col H` or `f`); no parameters means home
    Cup,
    /// Relative cursor movement (`CSI n A/B/C/D`)
    CursorMove,
    /// Save or restore cursor position (`CSI s` / `CSI u`)
    CursorSave,
    /// Erase in display (`CSI n J`)
    EraseDisplay,
    /// Erase in line (`CSI n K`)
    EraseLine,
    /// DEC private mode set/reset (`CSI ? n h` / `CSI ? n l`)
    PrivateMode,
    /// Anything else, including every OSC, DCS, and string sequence
    Unknown,
}

impl ControlKind {
    /// Map a CSI final byte to its kind.
    ///
    /// `private` is true when the parameter string began with `?`. Private
    /// markers are only meaningful for `h`/`l`; any other final byte with a
    /// private marker is [`ControlKind::Unknown`].
    pub fn from_csi_final(final_byte: u8, private: bool) -> Self {
        match (final_byte, private) {
            (b'h' | b'l', true) => ControlKind::PrivateMode,
            (_, true) => ControlKind::Unknown,
            (b'm', false) => ControlKind::Sgr,
            (b'H' | b'f', false) => ControlKind::Cup,
            (b'A' | b'B' | b'C' | b'D', false) => ControlKind::CursorMove,
            (b's' | b'u', false) => ControlKind::CursorSave,
            (b'J', false) => ControlKind::EraseDisplay,
            (b'K', false) => ControlKind::EraseLine,
            _ => ControlKind::Unknown,
        }
    }

    /// Check if this kind is on the safe-mode whitelist.
    pub fn is_whitelisted(&self) -> bool {
        !matches!(self, ControlKind::Unknown)
    }

    /// Check if this kind moves the cursor to an explicit location.
    pub fn is_cursor_addressing(&self) -> bool {
        matches!(self, ControlKind::Cup | ControlKind::CursorMove)
    }
}

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlKind::Sgr => write!(f, "sgr"),
            ControlKind::Cup => write!(f, "cup"),
            ControlKind::CursorMove => write!(f, "cursor_move"),
            ControlKind::CursorSave => write!(f, "cursor_save"),
            ControlKind::EraseDisplay => write!(f, "ed"),
            ControlKind::EraseLine => write!(f, "el"),
            ControlKind::PrivateMode => write!(f, "dec"),
            ControlKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Introducer family of an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceFamily {
    /// `ESC [` control sequence
    Csi,
    /// `ESC ]` operating system command
    Osc,
    /// `ESC P` device control string
    Dcs,
    /// `ESC X`, `ESC ^`, `ESC _` (SOS, PM, APC) string sequences
    String,
    /// Any other two-byte escape, or a bare trailing `ESC`
    Escape,
}

impl SequenceFamily {
    /// Whether this family carries a terminated string payload.
    ///
    /// These families can reach terminal side effects (titles, clipboard,
    /// device control) and are never whitelisted.
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            SequenceFamily::Osc | SequenceFamily::Dcs | SequenceFamily::String
        )
    }
}

impl std::fmt::Display for SequenceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceFamily::Csi => write!(f, "csi"),
            SequenceFamily::Osc => write!(f, "osc"),
            SequenceFamily::Dcs => write!(f, "dcs"),
            SequenceFamily::String => write!(f, "string"),
            SequenceFamily::Escape => write!(f, "escape"),
        }
    }
}

/// How the legacy blink attribute is mapped onto bright backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceMode {
    /// Rewrite only SGRs that combine blink with a 40-47 background
    #[default]
    Auto,
    /// Rewrite every 40-47 background to its bright variant
    On,
    /// Never rewrite
    Off,
}

impl std::fmt::Display for IceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IceMode::Auto => write!(f, "auto"),
            IceMode::On => write!(f, "on"),
            IceMode::Off => write!(f, "off"),
        }
    }
}

impl FromStr for IceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(IceMode::Auto),
            "on" => Ok(IceMode::On),
            "off" => Ok(IceMode::Off),
            other => Err(format!("invalid iCE mode `{other}` (expected auto, on, off)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csi_final_mapping() {
        assert_eq!(ControlKind::from_csi_final(b'm', false), ControlKind::Sgr);
        assert_eq!(ControlKind::from_csi_final(b'H', false), ControlKind::Cup);
        assert_eq!(ControlKind::from_csi_final(b'f', false), ControlKind::Cup);
        for b in [b'A', b'B', b'C', b'D'] {
            assert_eq!(ControlKind::from_csi_final(b, false), ControlKind::CursorMove);
        }
        assert_eq!(ControlKind::from_csi_final(b'J', false), ControlKind::EraseDisplay);
        assert_eq!(ControlKind::from_csi_final(b'K', false), ControlKind::EraseLine);
        assert_eq!(ControlKind::from_csi_final(b's', false), ControlKind::CursorSave);
        assert_eq!(ControlKind::from_csi_final(b'n', false), ControlKind::Unknown);
    }

    #[test]
    fn test_private_marker_only_for_modes() {
        assert_eq!(ControlKind::from_csi_final(b'h', true), ControlKind::PrivateMode);
        assert_eq!(ControlKind::from_csi_final(b'l', true), ControlKind::PrivateMode);
        assert_eq!(ControlKind::from_csi_final(b'h', false), ControlKind::Unknown);
        assert_eq!(ControlKind::from_csi_final(b'm', true), ControlKind::Unknown);
    }

    #[test]
    fn test_whitelist() {
        assert!(ControlKind::Sgr.is_whitelisted());
        assert!(ControlKind::PrivateMode.is_whitelisted());
        assert!(!ControlKind::Unknown.is_whitelisted());
    }

    #[test]
    fn test_ice_mode_parse() {
        assert_eq!("auto".parse::<IceMode>(), Ok(IceMode::Auto));
        assert_eq!("ON".parse::<IceMode>(), Ok(IceMode::On));
        assert_eq!("off".parse::<IceMode>(), Ok(IceMode::Off));
        assert!("blink".parse::<IceMode>().is_err());
        assert_eq!(IceMode::default(), IceMode::Auto);
    }

    #[test]
    fn test_string_families() {
        assert!(SequenceFamily::Osc.is_string());
        assert!(SequenceFamily::Dcs.is_string());
        assert!(!SequenceFamily::Csi.is_string());
    }
}
