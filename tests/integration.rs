//! Integration tests for ansiterm.
//!
//! These tests drive the whole pipeline from raw CP437 bytes, the way the
//! `view`, `info` and `ansify` commands use it.

use std::fs;
use std::path::PathBuf;

use ansiterm_ansi::{CodePage, SafetyFilter};
use ansiterm_config::Config;
use ansiterm_core::{ControlKind, IceMode, SequenceFamily, Token};
use ansiterm_parser::tokenize;
use ansiterm_render::{
    analyze_bytes, analyze_file, filter_text, process, render_file, AnsiBuilder, RenderOptions,
    Renderer, TerminalModes,
};
use ansiterm_sauce::{append_minimal, has_sauce, SauceOptions};

/// Options that emit nothing around the art.
fn bare(ice_mode: IceMode, safe_mode: bool) -> RenderOptions {
    RenderOptions {
        ice_mode,
        safe_mode,
        modes: TerminalModes::none(),
        ..RenderOptions::default()
    }
}

/// A scratch file under the target directory.
fn scratch(name: &str, data: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ansiterm-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}

// =============================================================================
// Pipeline Scenarios
// =============================================================================

#[test]
fn test_blink_background_becomes_bright() {
    let out = process(b"\x1b[5;44m\x1b[31mHello\x1b[0m", &bare(IceMode::Auto, true));
    assert_eq!(out, "\x1b[104m\x1b[31mHello\x1b[0m");
}

#[test]
fn test_osc_title_is_dropped() {
    let out = process(b"\x1b]0;evil_title_with_BEL\x07OK", &bare(IceMode::Auto, true));
    assert_eq!(out, "OK");
}

#[test]
fn test_dcs_and_apc_are_dropped() {
    let out = process(b"A\x1bPq#0;2;0;0;0\x1b\\B\x1b_payload\x07C", &bare(IceMode::Auto, true));
    assert_eq!(out, "ABC");
}

#[test]
fn test_unknown_csi_is_dropped() {
    // Device status report and window manipulation
    let out = process(b"A\x1b[6nB\x1b[8;50;200tC", &bare(IceMode::Auto, true));
    assert_eq!(out, "ABC");
}

#[test]
fn test_whitelisted_sequences_pass() {
    let input = "\x1b[2J\x1b[H\x1b[10;5H\x1b[3A\x1b[K\x1b[s\x1b[u\x1b[?7l\x1b[1;33mX";
    let out = process(input.as_bytes(), &bare(IceMode::Off, true));
    assert_eq!(out, input);
}

#[test]
fn test_unsafe_mode_passes_everything() {
    let input = b"\x1b]0;title\x07\x1b[6nOK";
    let out = process(input, &bare(IceMode::Off, false));
    assert_eq!(out.as_bytes(), input);
}

#[test]
fn test_unsafe_mode_still_rewrites_ice() {
    let out = process(b"\x1b[5;41mX", &bare(IceMode::Auto, false));
    assert_eq!(out, "\x1b[101mX");
}

#[test]
fn test_ice_modes() {
    let input = b"\x1b[44mA\x1b[5;44mB\x1b[5mC";
    assert_eq!(
        process(input, &bare(IceMode::Auto, true)),
        "\x1b[44mA\x1b[104mB\x1b[5mC"
    );
    assert_eq!(
        process(input, &bare(IceMode::On, true)),
        "\x1b[104mA\x1b[104mB\x1b[5mC"
    );
    assert_eq!(
        process(input, &bare(IceMode::Off, true)),
        "\x1b[44mA\x1b[5;44mB\x1b[5mC"
    );
}

#[test]
fn test_cp437_art_with_sauce() {
    let art = b"\x1b[0;1;34m\xc9\xcd\xcd\xbb\r\n\xc8\xcd\xcd\xbc\x1b[0m";
    let data = append_minimal(art, &SauceOptions::default()).unwrap();

    let out = process(&data, &bare(IceMode::Auto, true));
    assert_eq!(out, "\x1b[0;1;34m╔══╗\r\n╚══╝\x1b[0m");
}

#[test]
fn test_filter_text_directly() {
    let filter = SafetyFilter::new(true, IceMode::Auto);
    assert_eq!(filter_text("a\x1b[5;40mb\x1b]2;x\x07c", &filter), "a\x1b[100mbc");
}

// =============================================================================
// Tokenizer
// =============================================================================

#[test]
fn test_tokenizer_classifies_stream() {
    let input = "Hi\x1b[1;31m\x1b[?25l\x1b]0;t\x07\x1b[99z";
    let tokens: Vec<_> = tokenize(input).collect();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0], Token::Text("Hi"));

    let sgr = tokens[1].as_control().unwrap();
    assert_eq!(sgr.kind, ControlKind::Sgr);
    assert_eq!(sgr.params, vec![1, 31]);

    let private = tokens[2].as_control().unwrap();
    assert_eq!(private.kind, ControlKind::PrivateMode);
    assert!(private.private);

    let osc = tokens[3].as_control().unwrap();
    assert_eq!(osc.family, SequenceFamily::Osc);
    assert_eq!(osc.kind, ControlKind::Unknown);

    assert_eq!(tokens[4].as_control().unwrap().kind, ControlKind::Unknown);

    let joined: String = tokens.iter().map(Token::raw).collect();
    assert_eq!(joined, input);
}

// =============================================================================
// Renderer
// =============================================================================

#[test]
fn test_renderer_prelude_and_postlude() {
    let mut out = Vec::new();
    Renderer::new(&mut out).render(b"\x1b[5;44mX").unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "\x1b[?1049h\x1b[?7l\x1b[?25l\x1b[2J\x1b[H\x1b[104mX\x1b[0m\x1b[?25h\x1b[?7h\x1b[?1049l"
    );
}

#[test]
fn test_render_file_from_config() {
    let path = scratch("render.ans", b"\x1b]0;t\x07\x1b[5;42mOK");
    let config = Config::from_toml_str(
        "[render]\nUseAltScreen = false\nDisableWrap = false\nHideCursor = false\nClearFirst = false",
    )
    .unwrap();
    let options = RenderOptions::from_config(&config.render).unwrap();

    let mut out = Vec::new();
    render_file(&path, options, &mut out).unwrap();
    assert_eq!(out, b"\x1b[102mOK\x1b[0m");
}

#[test]
fn test_render_missing_file() {
    let mut out = Vec::new();
    let result = render_file(
        &PathBuf::from("/nonexistent/ansiterm/art.ans"),
        RenderOptions::default(),
        &mut out,
    );
    assert!(result.is_err());
    assert!(out.is_empty());
}

// =============================================================================
// Analysis
// =============================================================================

#[test]
fn test_analysis_of_plain_block() {
    let rows: Vec<String> = (0..30).map(|_| "x".repeat(90)).collect();
    let analysis = analyze_bytes(rows.join("\r\n").as_bytes());

    assert!(!analysis.has_sauce);
    assert!(!analysis.uses_ice);
    assert!(!analysis.has_cup);
    assert_eq!(analysis.est_cols, 90);
    assert_eq!(analysis.est_rows, 30);
    assert_eq!(analysis.suggested_width, 90);
    assert_eq!(analysis.suggested_height, 30);
}

#[test]
fn test_analysis_of_file_with_sauce() {
    let options = SauceOptions {
        title: "Logo".into(),
        author: "artist".into(),
        ice_colors: true,
        ..SauceOptions::default()
    };
    let data = append_minimal(b"\x1b[5;44m\x1b[3;10Hlogo", &options).unwrap();
    let path = scratch("logo.ans", &data);

    let analysis = analyze_file(&path).unwrap();
    assert!(analysis.has_sauce);
    assert!(analysis.uses_ice);
    assert!(analysis.has_cup);
    assert_eq!((analysis.est_cols, analysis.est_rows), (13, 3));
    assert_eq!((analysis.suggested_width, analysis.suggested_height), (80, 25));

    let sauce = analysis.sauce.unwrap();
    assert_eq!(sauce.title, "Logo");
    assert_eq!(sauce.author, "artist");
    assert!(sauce.ice_colors());
}

// =============================================================================
// Authoring
// =============================================================================

#[test]
fn test_builder_output_survives_safe_render() {
    let mut b = AnsiBuilder::new(80, 25);
    b.clear()
        .home()
        .fg(7, true)
        .bg(1, false)
        .move_to(2, 3)
        .text("╔═╗\x1b]0;sneaky\x07")
        .reset();
    let data = b.to_bytes_with_sauce(&SauceOptions::default()).unwrap();
    assert!(has_sauce(&data));

    let text = CodePage::Cp437.decode(ansiterm_sauce::strip(&data));
    let out = process(&data, &bare(IceMode::Off, true));
    assert_eq!(out, text);
    assert!(!out.contains("\x1b]"));
}
