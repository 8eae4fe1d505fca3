//! Ansiterm Render
//!
//! This crate orchestrates the ansiterm pipeline: SAUCE strip, CP437
//! decode, tokenize, safety filter with iCE rewriting, and output.
//!
//! # Features
//!
//! - **Safe rendering** - only whitelisted control sequences reach the terminal
//! - **iCE colors** - blink + background rewritten to bright backgrounds
//! - **Terminal modes** - optional alternate screen prelude and restoring postlude
//! - **Analysis** - dimensions, iCE use, and cursor addressing of a file
//! - **Builder** - programmatic construction of ANSI art
//!
//! # Example
//!
//! ```
//! use ansiterm_render::{process, RenderOptions};
//!
//! let out = process(b"\x1b[5;44m\x1b[31mHello\x1b[0m", &RenderOptions::default());
//! assert_eq!(out, "\x1b[104m\x1b[31mHello\x1b[0m");
//! ```

pub mod analyze;
pub mod builder;
pub mod terminal;

pub use analyze::{analyze_bytes, analyze_file, analyze_text, Analysis, StreamAnalyzer};
pub use builder::AnsiBuilder;
pub use terminal::{is_tty, terminal_size, TerminalModes};

use std::io::Write;
use std::path::Path;

use ansiterm_ansi::{CodePage, SafetyFilter};
use ansiterm_config::RenderConfig;
use ansiterm_core::{IceMode, Result};
use ansiterm_parser::tokenize;
use log::{debug, trace};

/// Resolved options for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// iCE color handling
    pub ice_mode: IceMode,
    /// Enforce the control-sequence whitelist
    pub safe_mode: bool,
    /// Code page used to decode input
    pub code_page: CodePage,
    /// Sequences written around the art
    pub modes: TerminalModes,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ice_mode: IceMode::Auto,
            safe_mode: true,
            code_page: CodePage::Cp437,
            modes: TerminalModes::new(true, true, true, true),
        }
    }
}

impl RenderOptions {
    /// Create options from a render configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ansiterm_core::AnsitermError::UnsupportedCodec`] if the
    /// configured codec is not a CP437 alias.
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            ice_mode: config.ice_mode,
            safe_mode: config.safe_mode,
            code_page: config.code_page()?,
            modes: TerminalModes::from_config(config),
        })
    }

    /// The safety filter these options describe.
    pub fn filter(&self) -> SafetyFilter {
        SafetyFilter::new(self.safe_mode, self.ice_mode)
    }
}

/// Run decoded text through the tokenizer and filter.
pub fn filter_text(text: &str, filter: &SafetyFilter) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        trace!("Token: {:?}", token);
        if let Some(emitted) = filter.apply(&token) {
            out.push_str(&emitted);
        }
    }
    out
}

/// Strip SAUCE, decode, and filter raw art bytes.
///
/// This is the whole pipeline without terminal modes; the result is safe to
/// write to a terminal as-is.
pub fn process(data: &[u8], options: &RenderOptions) -> String {
    let art = ansiterm_sauce::strip(data);
    debug!(
        "Processing {} bytes ({} after SAUCE strip), codec={}, ice={}, safe={}",
        data.len(),
        art.len(),
        options.code_page,
        options.ice_mode,
        options.safe_mode
    );
    let text = options.code_page.decode(art);
    filter_text(&text, &options.filter())
}

/// Terminal renderer for ANSI art.
pub struct Renderer<W: Write> {
    /// Output sink
    writer: W,
    /// Pipeline and mode options
    options: RenderOptions,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer with default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, RenderOptions::default())
    }

    /// Create a renderer with custom options.
    pub fn with_options(writer: W, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    /// The active options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Set the options.
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Write the prelude (alternate screen, modes, clear).
    pub fn begin(&mut self) -> Result<()> {
        self.writer.write_all(self.options.modes.enter.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Process and write art with no terminal mode handling.
    pub fn write_art(&mut self, data: &[u8]) -> Result<()> {
        let text = process(data, &self.options);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write the postlude restoring terminal state.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.write_all(self.options.modes.exit.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Render art with prelude and postlude.
    ///
    /// The postlude is written even if writing the art fails; the first
    /// error is returned.
    pub fn render(&mut self, data: &[u8]) -> Result<()> {
        self.begin()?;
        let body = self.write_art(data);
        let restore = self.finish();
        body.and(restore)
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Read a file and render it to `writer`.
///
/// # Errors
///
/// Returns [`ansiterm_core::AnsitermError::Io`] if the file cannot be read
/// or the writer fails.
pub fn render_file<W: Write>(path: &Path, options: RenderOptions, writer: W) -> Result<()> {
    let data = std::fs::read(path)?;
    debug!("Rendering file: {}", path.display());
    Renderer::with_options(writer, options).render(&data)
}
