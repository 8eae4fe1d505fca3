//! Fixed-layout SAUCE v00 record.
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 5 | ID `SAUCE` |
//! | 5 | 2 | Version `00` |
//! | 7 | 35 | Title |
//! | 42 | 20 | Author |
//! | 62 | 20 | Group |
//! | 82 | 8 | Date `CCYYMMDD` |
//! | 90 | 4 | FileSize (LE) |
//! | 94 | 1 | DataType |
//! | 95 | 1 | FileType |
//! | 96 | 8 | TInfo1..TInfo4 (LE u16 each) |
//! | 104 | 1 | Comments |
//! | 105 | 1 | TFlags |
//! | 106 | 22 | TInfoS |

use ansiterm_ansi::CodePage;
use ansiterm_core::{AnsitermError, Result};
use log::warn;

use crate::{has_sauce, MARKER, RECORD_LEN};

const TITLE: std::ops::Range<usize> = 7..42;
const AUTHOR: std::ops::Range<usize> = 42..62;
const GROUP: std::ops::Range<usize> = 62..82;
const DATE: std::ops::Range<usize> = 82..90;
const FILE_SIZE: usize = 90;
const DATA_TYPE: usize = 94;
const FILE_TYPE: usize = 95;
const T_INFO: usize = 96;
const COMMENTS: usize = 104;
const T_FLAGS: usize = 105;
const T_INFO_S: std::ops::Range<usize> = 106..128;

/// DataType for character-based files.
pub const DATA_TYPE_CHARACTER: u8 = 1;

/// FileType for ANSI within the character DataType.
pub const FILE_TYPE_ANSI: u8 = 1;

/// TFlags bit selecting non-blink mode (iCE colors).
pub const FLAG_ICE_COLORS: u8 = 0b0000_0001;

/// Caller-supplied fields for a minimal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SauceOptions {
    /// Title, up to 35 bytes
    pub title: String,
    /// Author, up to 20 bytes
    pub author: String,
    /// Group, up to 20 bytes
    pub group: String,
    /// Date as `YYYYMMDD`; today's local date when `None`
    pub date: Option<String>,
    /// Width in columns (TInfo1)
    pub width: u16,
    /// Height in rows (TInfo2)
    pub height: u16,
    /// Set the iCE colors (non-blink) flag
    pub ice_colors: bool,
    /// Fail instead of truncating over-long fields
    pub strict: bool,
}

impl Default for SauceOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            group: String::new(),
            date: None,
            width: 80,
            height: 25,
            ice_colors: false,
            strict: false,
        }
    }
}

/// A decoded SAUCE record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SauceRecord {
    /// Title, trailing padding removed
    pub title: String,
    /// Author, trailing padding removed
    pub author: String,
    /// Group, trailing padding removed
    pub group: String,
    /// Date as written, trailing padding removed
    pub date: String,
    /// Size of the data preceding the EOF byte
    pub file_size: u32,
    /// DataType
    pub data_type: u8,
    /// FileType
    pub file_type: u8,
    /// TInfo1 (width for character files)
    pub t_info1: u16,
    /// TInfo2 (height for character files)
    pub t_info2: u16,
    /// TInfo3
    pub t_info3: u16,
    /// TInfo4
    pub t_info4: u16,
    /// Number of 64-byte comment lines preceding the record
    pub comments: u8,
    /// TFlags
    pub t_flags: u8,
    /// TInfoS (font name for character files)
    pub t_info_s: String,
}

fn decode_field(bytes: &[u8]) -> String {
    CodePage::Cp437
        .decode(bytes)
        .trim_end_matches([' ', '\0'])
        .to_string()
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn write_field(
    dst: &mut [u8],
    field: &'static str,
    value: &str,
    pad: u8,
    strict: bool,
) -> Result<()> {
    let encoded = CodePage::Cp437.encode_lossy(value, b'?');
    if encoded.len() > dst.len() {
        if strict {
            return Err(AnsitermError::FieldTooLong {
                field,
                max: dst.len(),
                actual: encoded.len(),
            });
        }
        warn!("Truncating SAUCE {} to {} bytes", field, dst.len());
    }
    let n = encoded.len().min(dst.len());
    dst[..n].copy_from_slice(&encoded[..n]);
    dst[n..].fill(pad);
    Ok(())
}

impl SauceRecord {
    /// Build a character/ANSI record describing `data_len` bytes of art.
    pub fn minimal(data_len: usize, options: &SauceOptions) -> Self {
        let date = options
            .date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y%m%d").to_string());

        Self {
            title: options.title.clone(),
            author: options.author.clone(),
            group: options.group.clone(),
            date,
            file_size: u32::try_from(data_len).unwrap_or(u32::MAX),
            data_type: DATA_TYPE_CHARACTER,
            file_type: FILE_TYPE_ANSI,
            t_info1: options.width,
            t_info2: options.height,
            t_info3: 0,
            t_info4: 0,
            comments: 0,
            t_flags: if options.ice_colors { FLAG_ICE_COLORS } else { 0 },
            t_info_s: String::new(),
        }
    }

    /// Parse the record occupying the final 128 bytes of `data`.
    ///
    /// Returns `None` when the `SAUCE00` marker is absent.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if !has_sauce(data) {
            return None;
        }
        let raw = &data[data.len() - RECORD_LEN..];

        Some(Self {
            title: decode_field(&raw[TITLE]),
            author: decode_field(&raw[AUTHOR]),
            group: decode_field(&raw[GROUP]),
            date: decode_field(&raw[DATE]),
            file_size: u32::from_le_bytes([
                raw[FILE_SIZE],
                raw[FILE_SIZE + 1],
                raw[FILE_SIZE + 2],
                raw[FILE_SIZE + 3],
            ]),
            data_type: raw[DATA_TYPE],
            file_type: raw[FILE_TYPE],
            t_info1: read_u16(raw, T_INFO),
            t_info2: read_u16(raw, T_INFO + 2),
            t_info3: read_u16(raw, T_INFO + 4),
            t_info4: read_u16(raw, T_INFO + 6),
            comments: raw[COMMENTS],
            t_flags: raw[T_FLAGS],
            t_info_s: decode_field(&raw[T_INFO_S]),
        })
    }

    /// Encode to the fixed 128-byte layout.
    ///
    /// Title, author, group, and date are space-padded; TInfoS is NUL-padded.
    ///
    /// # Errors
    ///
    /// Returns [`AnsitermError::FieldTooLong`] when `strict` is set and a
    /// string field exceeds its width.
    pub fn to_bytes(&self, strict: bool) -> Result<[u8; RECORD_LEN]> {
        let mut raw = [0u8; RECORD_LEN];
        raw[..MARKER.len()].copy_from_slice(MARKER);

        write_field(&mut raw[TITLE], "title", &self.title, b' ', strict)?;
        write_field(&mut raw[AUTHOR], "author", &self.author, b' ', strict)?;
        write_field(&mut raw[GROUP], "group", &self.group, b' ', strict)?;
        write_field(&mut raw[DATE], "date", &self.date, b' ', strict)?;

        raw[FILE_SIZE..FILE_SIZE + 4].copy_from_slice(&self.file_size.to_le_bytes());
        raw[DATA_TYPE] = self.data_type;
        raw[FILE_TYPE] = self.file_type;
        for (i, value) in [self.t_info1, self.t_info2, self.t_info3, self.t_info4]
            .into_iter()
            .enumerate()
        {
            raw[T_INFO + i * 2..T_INFO + i * 2 + 2].copy_from_slice(&value.to_le_bytes());
        }
        raw[COMMENTS] = self.comments;
        raw[T_FLAGS] = self.t_flags;
        write_field(&mut raw[T_INFO_S], "tinfos", &self.t_info_s, 0, strict)?;

        Ok(raw)
    }

    /// Check if this record describes character data.
    pub fn is_character(&self) -> bool {
        self.data_type == DATA_TYPE_CHARACTER
    }

    /// Width in columns, for character data with a non-zero TInfo1.
    pub fn width(&self) -> Option<u16> {
        (self.is_character() && self.t_info1 > 0).then_some(self.t_info1)
    }

    /// Height in rows, for character data with a non-zero TInfo2.
    pub fn height(&self) -> Option<u16> {
        (self.is_character() && self.t_info2 > 0).then_some(self.t_info2)
    }

    /// Whether the iCE colors (non-blink) flag is set.
    pub fn ice_colors(&self) -> bool {
        self.is_character() && self.t_flags & FLAG_ICE_COLORS != 0
    }
}
