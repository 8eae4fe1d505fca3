//! Ansiterm Core
//!
//! This crate provides the shared types for the ansiterm escape-sequence
//! pipeline.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Token`], [`ControlSequence`] - Classified pieces of an input stream
//! - [`ControlKind`], [`SequenceFamily`], [`IceMode`] - Closed enumerations
//! - [`FilterDecision`] - Per-token verdict of the safety filter
//! - [`AnsitermError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::{ControlKind, IceMode, SequenceFamily};
pub use error::{AnsitermError, Result};
pub use types::{ControlSequence, FilterDecision, Token};
