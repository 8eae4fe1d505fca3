//! Ansiterm ANSI
//!
//! This crate provides the byte-level building blocks of the ansiterm
//! pipeline.
//!
//! # Overview
//!
//! - [`codes`] - ANSI escape code constants and formatting helpers
//! - [`codepage`] - CP437 decoding and encoding
//! - [`ice`] - iCE color rewriting of SGR parameters
//! - [`sanitize`] - Whitelist safety filter and text sanitization
//!
//! # Example
//!
//! ```
//! use ansiterm_ansi::{CodePage, IceColorRewriter};
//! use ansiterm_core::IceMode;
//!
//! let text = CodePage::Cp437.decode(b"\xc9\xcd\xbb");
//! assert_eq!(text, "╔═╗");
//!
//! let ice = IceColorRewriter::new(IceMode::Auto);
//! assert_eq!(ice.rewrite_params(&[5, 44]), Some(vec![104]));
//! ```

pub mod codepage;
pub mod codes;
pub mod ice;
pub mod sanitize;

pub use codepage::CodePage;
pub use codes::*;
pub use ice::IceColorRewriter;
pub use sanitize::*;
