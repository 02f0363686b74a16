//! Output formatting helpers for the `gitsh` CLI.
//!
//! JSON output goes through [`output_json`]; human-readable output is
//! coloured only when the terminal supports it.

use std::env;
use std::io::{self, Write};

use gitshell_log::{ChangeKind, Commit, FileChange};
use owo_colors::OwoColorize;
use serde::Serialize;

// Ayu Dark palette.
const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c);
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54);
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78);
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80);
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff);

/// Print a value as pretty JSON to stdout.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print text to stdout as-is, adding a final newline if missing.
pub fn output_raw(text: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(text.as_bytes());
    if !text.is_empty() && !text.ends_with('\n') {
        let _ = handle.write_all(b"\n");
    }
}

/// Returns `true` if stdout is connected to a terminal.
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&io::stdout())
}

/// Determines if ANSI colour codes should be used.
///
/// `NO_COLOR` (any value), `CLICOLOR=0` and `TERM=dumb` disable colour;
/// `CLICOLOR_FORCE` forces it. Otherwise colour follows TTY detection.
pub fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }
    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }
    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }
    is_tty()
}

fn paint(text: &str, rgb: (u8, u8, u8), color: bool) -> String {
    if color {
        text.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        text.to_string()
    }
}

/// Colour for a file change: additions green, deletions red, the rest
/// yellow.
fn change_color(kind: &ChangeKind) -> (u8, u8, u8) {
    match kind {
        ChangeKind::Added | ChangeKind::Copied => PASS,
        ChangeKind::Deleted | ChangeKind::Unmerged => FAIL,
        _ => WARN,
    }
}

/// One line per change: `<action>  <path>` or `<action>  <from> -> <path>`.
pub fn format_change(change: &FileChange, color: bool) -> String {
    let action = paint(
        &format!("{:<5}", change.action),
        change_color(&change.kind()),
        color,
    );
    match &change.from {
        Some(from) => format!("{action} {from} -> {}", change.path),
        None => format!("{action} {}", change.path),
    }
}

/// A commit header line, its author/date line and its changes, indented.
pub fn format_commit(commit: &Commit, color: bool) -> String {
    let mut out = paint(&commit.revision, ACCENT, color);
    out.push(' ');
    out.push_str(&commit.message);
    if let Some(decoration) = &commit.decoration {
        out.push(' ');
        out.push_str(&paint(decoration, WARN, color));
    }
    out.push('\n');
    out.push_str(&paint(
        &format!("    {} | {}", commit.author, commit.date),
        MUTED,
        color,
    ));
    out.push('\n');
    for change in &commit.changes {
        out.push_str("    ");
        out.push_str(&format_change(change, color));
        out.push('\n');
    }
    out
}

/// Print a list of names, marking `active` with `* `.
pub fn print_names(names: &[String], active: Option<&str>) {
    let color = supports_color();
    for name in names {
        if Some(name.as_str()) == active {
            println!("* {}", paint(name, PASS, color));
        } else {
            println!("  {}", name);
        }
    }
}

/// Print a short confirmation unless `quiet` is set.
pub fn print_done(quiet: bool, message: &str) {
    if !quiet {
        println!("{} {}", paint("\u{2713}", PASS, supports_color()), message);
    }
}
