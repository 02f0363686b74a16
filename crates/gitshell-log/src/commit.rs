//! Commit and file-change records.

use serde::{Deserialize, Serialize};

/// One commit from a log listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Abbreviated revision hash.
    pub revision: String,
    /// Author name.
    pub author: String,
    /// Subject line.
    pub message: String,
    /// Commit date exactly as git printed it.
    pub date: String,
    /// Ref decoration such as `(HEAD -> main, tag: v1.0)`, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
    /// Files touched by the commit, in the order git listed them.
    #[serde(default)]
    pub changes: Vec<FileChange>,
}

/// One line of a commit's `--name-status` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Status code as printed by git (`A`, `M`, `D`, `R100`, ...).
    pub action: String,
    /// Path of the file after the change.
    pub path: String,
    /// Source path of a rename or copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Classification of a [`FileChange`] action code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    Unmerged,
    Unknown(String),
}

impl FileChange {
    /// Classify the action code by its first letter, so rename and copy
    /// scores like `R086` map to [`ChangeKind::Renamed`]/[`ChangeKind::Copied`].
    pub fn kind(&self) -> ChangeKind {
        match self.action.chars().next() {
            Some('A') => ChangeKind::Added,
            Some('M') => ChangeKind::Modified,
            Some('D') => ChangeKind::Deleted,
            Some('R') => ChangeKind::Renamed,
            Some('C') => ChangeKind::Copied,
            Some('T') => ChangeKind::TypeChanged,
            Some('U') => ChangeKind::Unmerged,
            _ => ChangeKind::Unknown(self.action.clone()),
        }
    }
}

impl ChangeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
            Self::Renamed => "renamed",
            Self::Copied => "copied",
            Self::TypeChanged => "type-changed",
            Self::Unmerged => "unmerged",
            Self::Unknown(code) => code,
        }
    }
}
