//! Command-line interface for ansiterm.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Ansiterm - view and author BBS-style ANSI art in modern terminals.
///
/// Art is decoded from CP437, filtered so only layout and color sequences
/// reach the terminal, and shown with iCE colors as bright backgrounds.
#[derive(Parser, Debug)]
#[command(
    name = "ansiterm",
    author = "Ansiterm Contributors",
    version,
    about = "View and author BBS-style ANSI art in modern terminals",
    after_help = "Examples:\n  \
                  ansiterm view banner.ans\n  \
                  ansiterm view --no-ice artpack/*.ans\n  \
                  ansiterm info banner.ans\n  \
                  ansiterm ansify --text \"MY BBS\" --fg 15 --bg 4 -o banner.ans"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    /// Use a config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render ANSI art files
    View(ViewArgs),
    /// Show the analysis of ANSI art files
    Info(InfoArgs),
    /// Generate a boxed text banner
    Ansify(AnsifyArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// ANSI art files to view
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Disable iCE color mapping
    #[arg(long = "no-ice", conflicts_with = "ice_on")]
    pub no_ice: bool,

    /// Map every normal background to bright, with or without blink
    #[arg(long = "ice-on")]
    pub ice_on: bool,

    /// Render on the main screen instead of the alternate screen
    #[arg(long = "no-alt-screen")]
    pub no_alt_screen: bool,

    /// Disable safety filtering (allow all sequences)
    #[arg(long = "no-safe")]
    pub no_safe: bool,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// ANSI art files to analyze
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AnsifyArgs {
    /// Text to render
    #[arg(long = "text")]
    pub text: String,

    /// Foreground color (0-15, 8 and above are bright)
    #[arg(long = "fg", default_value = "7", value_parser = clap::value_parser!(u8).range(0..16))]
    pub fg: u8,

    /// Background color (0-15, 8 and above are bright)
    #[arg(long = "bg", value_parser = clap::value_parser!(u8).range(0..16))]
    pub bg: Option<u8>,

    /// Use bright foreground
    #[arg(long = "bright-fg")]
    pub bright_fg: bool,

    /// Use bright background
    #[arg(long = "bright-bg")]
    pub bright_bg: bool,

    /// Width in columns
    #[arg(long = "width", default_value = "80")]
    pub width: u16,

    /// Height in rows
    #[arg(long = "height", default_value = "25")]
    pub height: u16,

    /// Center the banner horizontally
    #[arg(long = "center")]
    pub center: bool,

    /// SAUCE title metadata
    #[arg(long = "sauce-title")]
    pub sauce_title: Option<String>,

    /// SAUCE author metadata
    #[arg(long = "sauce-author")]
    pub sauce_author: Option<String>,

    /// SAUCE group metadata
    #[arg(long = "sauce-group")]
    pub sauce_group: Option<String>,

    /// Output .ANS file
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
}

impl AnsifyArgs {
    /// Check if any SAUCE field was given.
    pub fn wants_sauce(&self) -> bool {
        self.sauce_title.is_some() || self.sauce_author.is_some() || self.sauce_group.is_some()
    }
}
