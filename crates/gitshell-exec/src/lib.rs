//! Shell command execution for gitshell.
//!
//! This crate runs a fully assembled command line in a working directory,
//! captures both output streams, and reports a nonzero exit status as a
//! typed error. It also provides the argument quoting that callers must
//! apply before interpolating untrusted values into a command line.

pub mod env;
pub mod quote;
pub mod runner;

pub use env::EnvOverlay;
pub use quote::{quote, quote_all};
pub use runner::{ExecError, Result, Runner, execute};
