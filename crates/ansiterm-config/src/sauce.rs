//! SAUCE writing configuration.

use serde::{Deserialize, Serialize};

/// Settings applied when appending SAUCE records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SauceConfig {
    /// Fail with FieldTooLong instead of truncating.
    /// Default: false
    #[serde(default)]
    pub strict: bool,

    /// Set the iCE colors (non-blink) flag in TFlags.
    /// Default: false
    #[serde(default)]
    pub ice_flag: bool,
}

impl SauceConfig {
    /// Merge another SauceConfig into this one.
    pub fn merge(&mut self, other: &SauceConfig) {
        self.strict = other.strict;
        self.ice_flag = other.ice_flag;
    }
}
