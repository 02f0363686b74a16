//! Repository error types.

use std::io;
use std::path::PathBuf;

use gitshell_exec::ExecError;
use gitshell_log::ParseError;

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A git invocation failed or could not be run.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// Log output could not be decoded.
    #[error("failed to parse git log: {0}")]
    Parse(#[from] ParseError),

    /// The path does not exist or is not a directory.
    #[error("\"{}\" must be a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The path to create already exists.
    #[error("\"{}\" already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// The parent of a path to create does not exist.
    #[error("parent directory of \"{}\" does not exist", .0.display())]
    MissingParent(PathBuf),

    /// The directory is not a git repository.
    #[error("\"{}\" is not a git repository", .0.display())]
    NotARepository(PathBuf),

    /// A required argument was empty.
    #[error("{0} must be specified")]
    MissingArgument(&'static str),

    /// A revision, name or pattern began with `-` and git would read it as
    /// an option.
    #[error("{what} must not start with '-': {value:?}")]
    OptionLike { what: &'static str, value: String },

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the repository crate.
pub type Result<T> = std::result::Result<T, RepoError>;

impl RepoError {
    /// Returns `true` if git ran and exited with a non-zero status.
    pub fn is_command_failure(&self) -> bool {
        matches!(self, Self::Exec(ExecError::CommandFailed { .. }))
    }

    /// Returns `true` if the operation was refused before anything ran.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory(_)
                | Self::AlreadyExists(_)
                | Self::MissingParent(_)
                | Self::NotARepository(_)
                | Self::MissingArgument(_)
                | Self::OptionLike { .. }
                | Self::Exec(ExecError::MissingWorkdir(_))
        )
    }

    /// The stderr captured from a failed git invocation.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Exec(err) => err.stderr(),
            _ => None,
        }
    }
}
