//! Command execution.
//!
//! [`execute`] is the single primitive the rest of gitshell is built on: run
//! one shell command line in a directory, wait for it, and hand back its
//! standard output or a typed failure. [`Runner`] binds that primitive to a
//! working directory, a tool executable and an [`EnvOverlay`].

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;

use thiserror::Error;
use tracing::debug;

use crate::env::EnvOverlay;
use crate::quote::quote;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when executing a command line.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The working directory does not exist or is not a directory.
    #[error("working directory does not exist: {}", .0.display())]
    MissingWorkdir(PathBuf),

    /// The shell could not be spawned.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The command line that was being run.
        command: String,
        #[source]
        source: io::Error,
    },

    /// Reading the child's output or waiting for it failed.
    #[error("failed to capture command output: {0}")]
    Capture(#[from] io::Error),

    /// The command exited with a non-zero status.
    #[error("command failed (exit code {code:?}): {}", .stderr.trim())]
    CommandFailed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// Everything the command wrote to stderr.
        stderr: String,
        /// Everything the command wrote to stdout.
        stdout: String,
    },
}

impl ExecError {
    /// The exit code of a failed command, if there was one.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }

    /// The captured stderr of a failed command.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

/// A specialized `Result` type for command execution.
pub type Result<T> = std::result::Result<T, ExecError>;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Execute `command_line` through the system shell in `cwd`.
///
/// The child inherits the ambient environment with `overlay` applied on top,
/// and gets a closed stdin. Stdout and stderr are drained concurrently until
/// both reach end of file, and only then is the child waited for, so a
/// command that fills one pipe while the other is unread cannot deadlock.
///
/// Returns the full stdout on exit status 0; stderr is discarded.
///
/// # Errors
///
/// Returns [`ExecError::MissingWorkdir`] if `cwd` is not a directory,
/// [`ExecError::Spawn`] if the shell cannot be started,
/// [`ExecError::Capture`] if reading the pipes or waiting fails, and
/// [`ExecError::CommandFailed`] with both captured streams if the command
/// exits with a non-zero status.
///
/// # Examples
///
/// ```no_run
/// use gitshell_exec::{EnvOverlay, execute};
/// use std::path::Path;
///
/// let out = execute(Path::new("."), "git --version", &EnvOverlay::new()).unwrap();
/// println!("{out}");
/// ```
pub fn execute(cwd: &Path, command_line: &str, overlay: &EnvOverlay) -> Result<String> {
    if !cwd.is_dir() {
        return Err(ExecError::MissingWorkdir(cwd.to_path_buf()));
    }

    let mut cmd = shell_command(command_line);
    cmd.current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    overlay.apply(&mut cmd);

    debug!(cwd = %cwd.display(), command = command_line, "spawning command");

    let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
        command: command_line.to_string(),
        source,
    })?;

    // The pipes are closed once drained; wait regardless of how draining went.
    let drained = drain(&mut child);
    let status = child.wait()?;
    let (stdout, stderr) = drained?;

    let stdout = String::from_utf8_lossy(&stdout).into_owned();
    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr).into_owned();
        debug!(code = ?status.code(), command = command_line, "command failed");
        return Err(ExecError::CommandFailed {
            code: status.code(),
            stderr,
            stdout,
        });
    }

    debug!(bytes = stdout.len(), "command succeeded");
    Ok(stdout)
}

/// A working directory, tool executable and environment overlay bundled
/// together, so that tool subcommands can be run as `<tool> <args>`.
#[derive(Debug, Clone)]
pub struct Runner {
    workdir: PathBuf,
    program: PathBuf,
    env: EnvOverlay,
}

impl Runner {
    /// Create a runner for `program` executing in `workdir`.
    pub fn new(workdir: impl Into<PathBuf>, program: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            program: program.into(),
            env: EnvOverlay::new(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn env(&self) -> &EnvOverlay {
        &self.env
    }

    /// Add or replace an environment variable for every later command.
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env.set(key, value);
    }

    /// Run `<program> <args>`. `args` is appended verbatim, so any
    /// caller-supplied value in it must already be quoted.
    pub fn run(&self, args: &str) -> Result<String> {
        let program = self.program.to_string_lossy();
        let line = if args.is_empty() {
            quote(&program).into_owned()
        } else {
            format!("{} {args}", quote(&program))
        };
        execute(&self.workdir, &line, &self.env)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command_line);
    cmd
}

/// Read stdout on this thread and stderr on a scoped worker until both hit
/// end of file. Both pipe handles are dropped before this returns.
fn drain(child: &mut Child) -> io::Result<(Vec<u8>, Vec<u8>)> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    thread::scope(|scope| {
        let stderr_reader = scope.spawn(move || read_all(stderr));
        let out = read_all(stdout);
        let err = stderr_reader
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("stderr reader panicked")));
        Ok((out?, err?))
    })
}

fn read_all<R: Read>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
