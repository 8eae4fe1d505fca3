//! Ansiterm - safe viewing and authoring of BBS-style ANSI art.
//!
//! This binary provides the CLI interface to the ansiterm libraries:
//! `view` renders art, `info` prints its analysis, and `ansify` writes a
//! generated banner.

mod cli;
mod terminal;

use clap::Parser as ClapParser;
use cli::{AnsifyArgs, Cli, Command, InfoArgs, ViewArgs};
use log::{debug, error, info, LevelFilter};
use std::io::{self, IsTerminal, Write};

use ansiterm_config::Config;
use ansiterm_core::{IceMode, Result};
use ansiterm_render::{analyze_file, AnsiBuilder, RenderOptions, Renderer};
use ansiterm_sauce::SauceOptions;
use terminal::KeyWait;

/// Rows taken by the generated banner box.
const BANNER_ROWS: u16 = 5;

/// Columns the box adds around the text.
const BANNER_PADDING: u16 = 4;

/// Left margin of an uncentered banner.
const BANNER_MARGIN: u16 = 2;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Ansiterm v{}", env!("CARGO_PKG_VERSION"));

    terminal::init();

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    match &cli.command {
        Command::View(args) => run_view(args, config),
        Command::Info(args) => run_info(args),
        Command::Ansify(args) => run_ansify(args, &config),
    }
}

/// Apply `view` flags and terminal capabilities on top of the config.
fn view_config(args: &ViewArgs, mut config: Config, interactive: bool) -> Config {
    if args.no_ice {
        config.render.ice_mode = IceMode::Off;
    } else if args.ice_on {
        config.render.ice_mode = IceMode::On;
    }
    if args.no_safe {
        config.render.safe_mode = false;
    }
    if args.no_alt_screen || !interactive {
        // Art stays in scrollback; don't wipe what was there
        config.render.use_alt_screen = false;
        config.render.clear_first = false;
    }
    config
}

/// Render each file, waiting for a key between files on a terminal.
fn run_view(args: &ViewArgs, config: Config) -> Result<()> {
    let interactive = ansiterm_render::is_tty() && io::stdin().is_terminal();
    let config = view_config(args, config, interactive);
    let options = RenderOptions::from_config(&config.render)?;
    let alt_screen = config.render.use_alt_screen;

    let total = args.files.len();
    for (index, path) in args.files.iter().enumerate() {
        info!("Viewing file: {}", path.display());

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                error!("Cannot read {}: {}", path.display(), e);
                continue;
            }
        };

        let last = index + 1 == total;
        let mut renderer = Renderer::with_options(io::stdout(), options.clone());
        renderer.begin()?;
        let body = renderer.write_art(&data);

        // Inside the alternate screen the art vanishes on exit, so always wait there
        let wait = interactive && body.is_ok() && (alt_screen || !last);
        let key = if wait {
            prompt(last).and_then(|_| terminal::wait_for_key().map_err(Into::into))
        } else {
            Ok(KeyWait::Continue)
        };

        renderer.finish()?;
        if let Err(e) = body {
            error!("Error rendering {}: {}", path.display(), e);
            continue;
        }
        if key? == KeyWait::Quit {
            debug!("Quit requested");
            break;
        }
        if !alt_screen && !last {
            println!("\n");
        }
    }

    Ok(())
}

fn prompt(last: bool) -> Result<()> {
    let text = if last {
        "\r\n\r\nPress Enter to exit..."
    } else {
        "\r\n\r\nPress Enter for next file (q to quit)..."
    };
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print the analysis of each file.
fn run_info(args: &InfoArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for path in &args.files {
        let analysis = match analyze_file(path) {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("Cannot analyze {}: {}", path.display(), e);
                continue;
            }
        };

        writeln!(stdout, "\nFile: {}", path.display())?;
        writeln!(stdout, "  SAUCE: {}", yes_no(analysis.has_sauce))?;
        writeln!(stdout, "  iCE colors: {}", yes_no(analysis.uses_ice))?;
        writeln!(stdout, "  Cursor positioning: {}", yes_no(analysis.has_cup))?;
        writeln!(stdout, "  Estimated size: {}x{}", analysis.est_cols, analysis.est_rows)?;
        writeln!(
            stdout,
            "  Suggested size: {}x{}",
            analysis.suggested_width, analysis.suggested_height
        )?;
        if let Some(sauce) = &analysis.sauce {
            for (label, value) in [
                ("Title", &sauce.title),
                ("Author", &sauce.author),
                ("Group", &sauce.group),
                ("Date", &sauce.date),
            ] {
                if !value.is_empty() {
                    writeln!(stdout, "  {}: {}", label, value)?;
                }
            }
            if sauce.ice_colors() {
                writeln!(stdout, "  SAUCE iCE flag: Yes")?;
            }
        }
    }
    stdout.flush()?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Draw the boxed banner described by `args`.
fn build_banner(args: &AnsifyArgs) -> AnsiBuilder {
    let mut b = AnsiBuilder::new(args.width, args.height);
    b.clear().home().reset();

    b.fg(args.fg % 8, args.bright_fg || args.fg >= 8);
    if let Some(bg) = args.bg {
        b.bg(bg % 8, args.bright_bg || bg >= 8);
    }

    let text_len = u16::try_from(args.text.chars().count()).unwrap_or(u16::MAX);
    let box_width = text_len.saturating_add(BANNER_PADDING);
    let inner = "═".repeat(usize::from(box_width - 2));
    let blank = " ".repeat(usize::from(box_width - 2));

    let col = if args.center {
        args.width.saturating_sub(box_width) / 2 + 1
    } else {
        BANNER_MARGIN
    };
    let row = args.height.saturating_sub(BANNER_ROWS) / 2 + 1;

    let lines = [
        format!("╔{inner}╗"),
        format!("║{blank}║"),
        format!("║ {} ║", args.text),
        format!("║{blank}║"),
        format!("╚{inner}╝"),
    ];
    for (offset, line) in (0..).zip(lines.iter()) {
        b.move_to(row + offset, col).text(line);
    }

    b.reset();
    b
}

/// Write a generated banner, with SAUCE when any SAUCE field is given.
fn run_ansify(args: &AnsifyArgs, config: &Config) -> Result<()> {
    let banner = build_banner(args);

    let data = if args.wants_sauce() {
        let options = SauceOptions {
            title: args.sauce_title.clone().unwrap_or_default(),
            author: args.sauce_author.clone().unwrap_or_default(),
            group: args.sauce_group.clone().unwrap_or_default(),
            ice_colors: config.sauce.ice_flag,
            strict: config.sauce.strict,
            ..SauceOptions::default()
        };
        banner.to_bytes_with_sauce(&options)?
    } else {
        banner.to_bytes_lossy()
    };

    std::fs::write(&args.output, &data)?;
    println!("Wrote {} bytes to {}", data.len(), args.output.display());
    Ok(())
}
