//! Ansiterm SAUCE
//!
//! SAUCE (Standard Architecture for Universal Comment Extensions) is a
//! 128-byte metadata record appended to BBS art files, conventionally
//! preceded by a DOS end-of-file byte (`0x1A`) and optionally by a block of
//! 64-byte comment lines.
//!
//! # Overview
//!
//! - [`has_sauce`] - Detect a record by its `SAUCE00` marker
//! - [`strip`] - Remove the record, comment block, and EOF byte
//! - [`append_minimal`] - Append a fresh character/ANSI record
//! - [`SauceRecord`] - Parse and encode the fixed layout
//!
//! # Example
//!
//! ```
//! use ansiterm_sauce::{append_minimal, has_sauce, strip, SauceOptions};
//!
//! let art = b"\x1b[31mHello\x1b[0m".to_vec();
//! let options = SauceOptions {
//!     title: "Hello".into(),
//!     author: "Artist".into(),
//!     ..SauceOptions::default()
//! };
//! let with_sauce = append_minimal(&art, &options)?;
//! assert!(has_sauce(&with_sauce));
//! assert_eq!(strip(&with_sauce), art.as_slice());
//! # Ok::<(), ansiterm_core::AnsitermError>(())
//! ```

pub mod record;

pub use record::{SauceOptions, SauceRecord};

use ansiterm_ansi::codes::EOF_MARKER;
use ansiterm_core::Result;

/// Size of a SAUCE record in bytes.
pub const RECORD_LEN: usize = 128;

/// Literal marker at the start of a v00 record: ID plus version.
pub const MARKER: &[u8; 7] = b"SAUCE00";

/// Literal marker at the start of a comment block.
pub const COMMENT_ID: &[u8; 5] = b"COMNT";

/// Size of one comment line in bytes.
pub const COMMENT_LINE_LEN: usize = 64;

/// Offset of the Comments count byte inside the record.
const COMMENTS_OFFSET: usize = 104;

/// Check if data ends with a SAUCE record.
///
/// The record occupies the final 128 bytes and must start with the exact
/// `SAUCE00` marker. The preceding EOF byte is optional.
pub fn has_sauce(data: &[u8]) -> bool {
    data.len() >= RECORD_LEN && &data[data.len() - RECORD_LEN..][..MARKER.len()] == MARKER
}

/// Remove a trailing SAUCE record if present.
///
/// Also removes the comment block the record announces, when it is really
/// there, and one EOF byte immediately before whichever of the two comes
/// first. Data without a record is returned unchanged.
///
/// # Example
///
/// ```
/// use ansiterm_sauce::strip;
/// assert_eq!(strip(b"no metadata here"), b"no metadata here");
/// ```
pub fn strip(data: &[u8]) -> &[u8] {
    if !has_sauce(data) {
        return data;
    }

    let record_start = data.len() - RECORD_LEN;
    let mut cut = record_start;

    let comments = usize::from(data[record_start + COMMENTS_OFFSET]);
    if comments > 0 {
        let block_len = COMMENT_ID.len() + comments * COMMENT_LINE_LEN;
        if cut >= block_len && data[cut - block_len..].starts_with(COMMENT_ID) {
            cut -= block_len;
        }
    }

    if cut > 0 && data[cut - 1] == EOF_MARKER {
        cut -= 1;
    }

    &data[..cut]
}

/// Append an EOF byte and a minimal character/ANSI SAUCE record.
///
/// `file_size` is set to `data.len()`. String fields are truncated to their
/// width unless `options.strict` is set.
///
/// # Errors
///
/// Returns [`ansiterm_core::AnsitermError::FieldTooLong`] in strict mode when
/// a field does not fit.
pub fn append_minimal(data: &[u8], options: &SauceOptions) -> Result<Vec<u8>> {
    let record = SauceRecord::minimal(data.len(), options);
    let encoded = record.to_bytes(options.strict)?;

    let mut out = Vec::with_capacity(data.len() + 1 + RECORD_LEN);
    out.extend_from_slice(data);
    out.push(EOF_MARKER);
    out.extend_from_slice(&encoded);
    Ok(out)
}

/// Parse the trailing record, if any.
pub fn read(data: &[u8]) -> Option<SauceRecord> {
    SauceRecord::parse(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SauceOptions {
        SauceOptions {
            title: "Test".into(),
            author: "AI".into(),
            group: "Group".into(),
            date: Some("19960101".into()),
            ..SauceOptions::default()
        }
    }

    #[test]
    fn test_no_sauce_short_input() {
        assert!(!has_sauce(b""));
        assert!(!has_sauce(b"SAUCE00"));
    }

    #[test]
    fn test_marker_must_be_exact() {
        let mut data = vec![b' '; 200];
        let start = data.len() - RECORD_LEN;
        data[start..start + 7].copy_from_slice(b"SAUCE01");
        assert!(!has_sauce(&data));
        assert_eq!(strip(&data), data.as_slice());
    }

    #[test]
    fn test_append_and_detect() {
        let data = append_minimal(b"art", &options()).unwrap();
        assert_eq!(data.len(), 3 + 1 + RECORD_LEN);
        assert_eq!(data[3], EOF_MARKER);
        assert!(has_sauce(&data));
    }

    #[test]
    fn test_round_trip() {
        let art = b"\x1b[5;44m\xdb\xdb\x1b[0m\r\n".to_vec();
        let data = append_minimal(&art, &options()).unwrap();
        assert_eq!(strip(&data), art.as_slice());
    }

    #[test]
    fn test_round_trip_empty() {
        let data = append_minimal(b"", &options()).unwrap();
        assert!(has_sauce(&data));
        assert_eq!(strip(&data), b"");
    }

    #[test]
    fn test_strip_is_idempotent_with_append() {
        let original = append_minimal(b"content", &options()).unwrap();
        let stripped = strip(&original).to_vec();
        let again = append_minimal(&stripped, &options()).unwrap();
        assert_eq!(strip(&again), stripped.as_slice());
    }

    #[test]
    fn test_strip_without_eof_marker() {
        let with = append_minimal(b"content", &options()).unwrap();
        let mut without = b"content".to_vec();
        without.extend_from_slice(&with[with.len() - RECORD_LEN..]);
        assert!(has_sauce(&without));
        assert_eq!(strip(&without), b"content");
    }

    #[test]
    fn test_strip_only_one_eof_marker() {
        let art = b"content\x1a".to_vec();
        let data = append_minimal(&art, &options()).unwrap();
        assert_eq!(strip(&data), art.as_slice());
    }

    #[test]
    fn test_strip_comment_block() {
        let mut record = SauceRecord::minimal(7, &options());
        record.comments = 2;
        let mut data = b"content\x1a".to_vec();
        data.extend_from_slice(COMMENT_ID);
        data.extend_from_slice(&[b' '; 2 * COMMENT_LINE_LEN]);
        data.extend_from_slice(&record.to_bytes(false).unwrap());
        assert_eq!(strip(&data), b"content");
    }

    #[test]
    fn test_strip_ignores_missing_comment_block() {
        let mut record = SauceRecord::minimal(7, &options());
        record.comments = 1;
        let mut data = b"content\x1a".to_vec();
        data.extend_from_slice(&record.to_bytes(false).unwrap());
        assert_eq!(strip(&data), b"content");
    }

    #[test]
    fn test_read() {
        let data = append_minimal(b"art", &options()).unwrap();
        let record = read(&data).unwrap();
        assert_eq!(record.title, "Test");
        assert_eq!(record.file_size, 3);
        assert!(read(b"art").is_none());
    }
}
