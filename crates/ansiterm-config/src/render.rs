//! Render configuration.
//!
//! This module contains the `RenderConfig` struct which controls the
//! escape-sequence pipeline and the terminal modes wrapped around output.

use ansiterm_ansi::CodePage;
use ansiterm_core::{IceMode, Result};
use serde::{Deserialize, Serialize};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderConfig {
    /// iCE color handling: auto, on, off.
    /// Default: auto
    #[serde(default)]
    pub ice_mode: IceMode,

    /// Drop every control sequence outside the whitelist.
    /// Default: true
    #[serde(default = "default_true")]
    pub safe_mode: bool,

    /// Legacy code page used to decode input.
    /// Default: "cp437"
    #[serde(default = "default_codec")]
    pub codec: String,

    /// Render inside the alternate screen buffer.
    /// Default: true
    #[serde(default = "default_true")]
    pub use_alt_screen: bool,

    /// Turn off automatic line wrap while rendering.
    /// Default: true
    #[serde(default = "default_true")]
    pub disable_wrap: bool,

    /// Hide the cursor while rendering.
    /// Default: true
    #[serde(default = "default_true")]
    pub hide_cursor: bool,

    /// Clear the screen and home the cursor before rendering.
    /// Default: true
    #[serde(default = "default_true")]
    pub clear_first: bool,
}

fn default_true() -> bool {
    true
}

fn default_codec() -> String {
    CodePage::default().name().to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ice_mode: IceMode::Auto,
            safe_mode: true,
            codec: default_codec(),
            use_alt_screen: true,
            disable_wrap: true,
            hide_cursor: true,
            clear_first: true,
        }
    }
}

impl RenderConfig {
    /// Merge another RenderConfig into this one.
    ///
    /// All fields are copied from `other`; fields absent from an override
    /// file were already filled with defaults during deserialization.
    pub fn merge(&mut self, other: &RenderConfig) {
        self.ice_mode = other.ice_mode;
        self.safe_mode = other.safe_mode;
        self.codec = other.codec.clone();
        self.use_alt_screen = other.use_alt_screen;
        self.disable_wrap = other.disable_wrap;
        self.hide_cursor = other.hide_cursor;
        self.clear_first = other.clear_first;
    }

    /// Resolve the configured code page.
    ///
    /// # Errors
    ///
    /// Returns [`ansiterm_core::AnsitermError::UnsupportedCodec`] for any
    /// name other than the CP437 aliases.
    pub fn code_page(&self) -> Result<CodePage> {
        CodePage::from_name(&self.codec)
    }
}
