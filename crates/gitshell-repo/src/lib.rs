//! Git repository handle and command builders.
//!
//! [`Repository`] resolves a directory on disk to a working or bare
//! repository and exposes git operations as methods. Every operation
//! assembles a command line, quoting caller-supplied values, and runs it
//! through [`gitshell_exec`]; log-style operations decode the output with
//! [`gitshell_log`].

mod branch;
pub mod detect;
pub mod error;
mod export;
pub mod fsutil;
mod history;
mod remote;
mod repository;
mod staging;
mod tag;

#[cfg(test)]
mod testutil;

pub use detect::{RepoKind, detect_kind};
pub use error::{RepoError, Result};
pub use repository::Repository;

pub use gitshell_config::{BareFallback, ToolConfig};
pub use gitshell_exec::{EnvOverlay, ExecError};
pub use gitshell_log::{ChangeKind, Commit, FileChange, ParseError};
