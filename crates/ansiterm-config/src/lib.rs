//! Ansiterm Config
//!
//! This crate holds the settings consumed at the boundary of the ansiterm
//! pipeline. Configuration is never discovered or persisted: it comes from
//! built-in defaults, optionally overridden by a TOML file or inline TOML
//! string the caller names explicitly.
//!
//! # Example
//!
//! ```
//! use ansiterm_config::Config;
//! use ansiterm_core::IceMode;
//!
//! let config = Config::from_toml_str("[render]\nIceMode = \"off\"").unwrap();
//! assert_eq!(config.render.ice_mode, IceMode::Off);
//! assert!(config.render.safe_mode);
//! ```

mod render;
mod sauce;

pub use render::RenderConfig;
pub use sauce::SauceConfig;

use ansiterm_core::{AnsitermError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[render]
IceMode      = "auto"
SafeMode     = true
Codec        = "cp437"
UseAltScreen = true
DisableWrap  = true
HideCursor   = true
ClearFirst   = true

[sauce]
Strict  = false
IceFlag = false
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering pipeline settings
    #[serde(default)]
    pub render: RenderConfig,

    /// SAUCE writing settings
    #[serde(default)]
    pub sauce: SauceConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use ansiterm_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[render]"));
    /// assert!(toml.contains("[sauce]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Parse configuration from a TOML string.
    ///
    /// Missing sections and keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AnsitermError::Config`] on malformed TOML or invalid values.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| AnsitermError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns [`AnsitermError::Io`] if the file cannot be read, or
    /// [`AnsitermError::Config`] if it does not parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            AnsitermError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Build configuration from an optional path or inline TOML string.
    ///
    /// An argument naming an existing file is loaded as a file; anything
    /// else is parsed as TOML. With no argument the defaults are returned.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Config::load_from`] and
    /// [`Config::from_toml_str`].
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let override_config = if override_path.is_file() {
                Self::load_from(override_path)?
            } else {
                Self::from_toml_str(override_str)?
            };
            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    pub fn merge(&mut self, other: &Config) {
        self.render.merge(&other.render);
        self.sauce.merge(&other.sauce);
    }
}
