//! Parser for `git log --name-status` output.
//!
//! The log is requested with a fixed `||`-separated summary format (see
//! [`LOG_FORMAT`]) and decoded into [`Commit`] records, each carrying the
//! ordered [`FileChange`] entries git listed for it.

pub mod commit;
pub mod parser;

pub use commit::{ChangeKind, Commit, FileChange};
pub use parser::{FIELD_SEPARATOR, LOG_FORMAT, ParseError, Result, parse};
