//! Decoding of `git log --name-status` text into [`Commit`] records.
//!
//! The text is produced by
//! `git log -<n> --name-status --pretty=format:'%h||%an||%s||%cd||%d'`.
//! Commits are separated by a blank line. The first line of each block is
//! the `||`-joined summary; the remaining non-empty lines are
//! tab-separated `<status>\t<path>` entries (`<status>\t<from>\t<to>` for
//! renames and copies).

use thiserror::Error;

use crate::commit::{Commit, FileChange};

/// Separator between summary fields.
pub const FIELD_SEPARATOR: &str = "||";

/// The `--pretty=format:` string whose output [`parse`] understands.
pub const LOG_FORMAT: &str = "%h||%an||%s||%cd||%d";

const BLOCK_SEPARATOR: &str = "\n\n";

/// Errors produced while decoding log text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A summary line did not contain revision, author, subject and date.
    #[error("malformed commit summary in block {block}: {line:?}")]
    MalformedSummary {
        /// Zero-based index of the block in the raw text.
        block: usize,
        /// The offending line.
        line: String,
    },

    /// A file line was neither a tab-separated change nor a summary.
    #[error("malformed file change in block {block}: {line:?}")]
    MalformedChange {
        /// Zero-based index of the block in the raw text.
        block: usize,
        /// The offending line.
        line: String,
    },
}

/// A specialized `Result` type for log parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse raw log text into commits, preserving git's order.
///
/// A commit with no file lines yields an empty `changes` vector. Git prints
/// commits without a manifest (merges, empty commits) with no blank line
/// after them, so a summary line found among the file lines of a block
/// starts a new commit.
///
/// # Errors
///
/// Returns [`ParseError::MalformedSummary`] for a summary with fewer than
/// four fields or an empty revision, and [`ParseError::MalformedChange`] for
/// a file line that neither starts with a status code and a tab nor is a
/// summary.
///
/// # Examples
///
/// ```
/// let raw = "a1b2c3||Alice||Fix bug||2024-01-01||\nM\tsrc/main.go";
/// let commits = gitshell_log::parse(raw).unwrap();
/// assert_eq!(commits[0].author, "Alice");
/// assert_eq!(commits[0].changes[0].path, "src/main.go");
/// ```
pub fn parse(raw: &str) -> Result<Vec<Commit>> {
    let normalized;
    let text = if raw.contains('\r') {
        normalized = raw.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        raw
    };

    let mut commits = Vec::new();
    for (index, block) in text.split(BLOCK_SEPARATOR).enumerate() {
        if block.trim().is_empty() {
            continue;
        }
        parse_block(index, block, &mut commits)?;
    }
    Ok(commits)
}

fn parse_block(index: usize, block: &str, out: &mut Vec<Commit>) -> Result<()> {
    let mut lines = block.lines().skip_while(|l| l.trim().is_empty());
    let Some(summary) = lines.next() else {
        return Ok(());
    };
    let mut current = parse_summary(index, summary)?;

    for line in lines {
        if line.is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((action, rest)) if is_status_code(action) => {
                current.changes.push(parse_change(action, rest));
            }
            _ if line.contains(FIELD_SEPARATOR) => {
                let next = parse_summary(index, line)?;
                out.push(std::mem::replace(&mut current, next));
            }
            _ => {
                return Err(ParseError::MalformedChange {
                    block: index,
                    line: line.to_string(),
                });
            }
        }
    }

    out.push(current);
    Ok(())
}

/// A `--name-status` code: one status letter, optionally followed by a
/// similarity score (`R087`).
fn is_status_code(action: &str) -> bool {
    let mut chars = action.chars();
    matches!(
        chars.next(),
        Some('A' | 'C' | 'D' | 'M' | 'R' | 'T' | 'U' | 'X' | 'B')
    ) && chars.all(|c| c.is_ascii_digit())
}

fn parse_summary(index: usize, line: &str) -> Result<Commit> {
    let malformed = || ParseError::MalformedSummary {
        block: index,
        line: line.to_string(),
    };

    let mut fields = line.split(FIELD_SEPARATOR);
    let (Some(revision), Some(author), Some(message), Some(date)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };
    if revision.trim().is_empty() {
        return Err(malformed());
    }

    // Anything past the date is the ref decoration (`%d`), which git
    // prints with a leading space, or nothing at all.
    let rest: Vec<&str> = fields.collect();
    let decoration = rest.join(FIELD_SEPARATOR);
    let decoration = decoration.trim();

    Ok(Commit {
        revision: revision.trim().to_string(),
        author: author.to_string(),
        message: message.to_string(),
        date: date.to_string(),
        decoration: (!decoration.is_empty()).then(|| decoration.to_string()),
        changes: Vec::new(),
    })
}

fn parse_change(action: &str, rest: &str) -> FileChange {
    match rest.split_once('\t') {
        Some((from, to)) => FileChange {
            action: action.to_string(),
            path: to.to_string(),
            from: Some(from.to_string()),
        },
        None => FileChange {
            action: action.to_string(),
            path: rest.to_string(),
            from: None,
        },
    }
}
