//! Repository type detection.
//!
//! A directory is a working repository when it contains a `.git` entry (a
//! directory, or a file as used by worktrees and submodules), and a bare
//! repository when its `config` file sets `core.bare`. Anything else is
//! handled by the configured [`BareFallback`].

use std::fs;
use std::path::Path;

use gitshell_config::BareFallback;
use tracing::warn;

use crate::error::{RepoError, Result};

/// The two kinds of repository a handle can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoKind {
    /// A working tree with store internals under `.git`.
    Working,
    /// A store with no working tree; internals live at the root.
    Bare,
}

impl RepoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Bare => "bare",
        }
    }
}

/// Classify the directory at `path`.
///
/// # Errors
///
/// Returns [`RepoError::NotADirectory`] if `path` is not a directory, and
/// [`RepoError::NotARepository`] if it has a `config` file that does not
/// declare a bare store, or has neither `.git` nor `config` while
/// `fallback` is [`BareFallback::Reject`].
pub fn detect_kind(path: &Path, fallback: BareFallback) -> Result<RepoKind> {
    if !path.is_dir() {
        return Err(RepoError::NotADirectory(path.to_path_buf()));
    }

    if path.join(".git").exists() {
        return Ok(RepoKind::Working);
    }

    let config = path.join("config");
    if config.is_file() {
        let text = fs::read_to_string(&config)?;
        return if declares_bare(&text) {
            Ok(RepoKind::Bare)
        } else {
            Err(RepoError::NotARepository(path.to_path_buf()))
        };
    }

    match fallback {
        BareFallback::AssumeBare => {
            warn!(path = %path.display(), "no .git or config found; assuming bare repository");
            Ok(RepoKind::Bare)
        }
        BareFallback::Reject => Err(RepoError::NotARepository(path.to_path_buf())),
    }
}

/// Whether a git config file sets `bare` to true in its `[core]` section.
/// The last assignment wins.
fn declares_bare(text: &str) -> bool {
    let mut in_core = true;
    let mut bare = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(section) = line.strip_prefix('[') {
            let name = section.trim_end_matches(']').trim();
            in_core = name.eq_ignore_ascii_case("core");
            continue;
        }
        if !in_core {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value.trim())),
            None => (line, None),
        };
        if key.eq_ignore_ascii_case("bare") {
            // A key with no value is true in git config syntax.
            bare = value.is_none_or(parse_bool);
        }
    }

    bare
}

fn parse_bool(value: &str) -> bool {
    let value = value
        .split(['#', ';'])
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"');
    ["true", "yes", "on", "1"]
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
}
