//! Error types for ansiterm

use thiserror::Error;

/// Main error type for ansiterm operations
#[derive(Error, Debug)]
pub enum AnsitermError {
    /// IO error during file or terminal operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A character has no representation in the legacy code page
    #[error("Encoding error: {ch:?} at position {position} has no CP437 representation")]
    Encoding {
        /// The offending character
        ch: char,
        /// Character index within the input text
        position: usize,
    },

    /// A SAUCE string field exceeds its fixed width and truncation is disabled
    #[error("SAUCE field `{field}` is {actual} bytes, maximum is {max}")]
    FieldTooLong {
        /// Field name (title, author, group, date, tinfos)
        field: &'static str,
        /// Fixed field width in bytes
        max: usize,
        /// Encoded length of the supplied value
        actual: usize,
    },

    /// The requested code page is not supported
    #[error("Unsupported codec: {0}")]
    UnsupportedCodec(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ansiterm operations
pub type Result<T> = std::result::Result<T, AnsitermError>;
