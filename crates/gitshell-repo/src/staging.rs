//! Index and commit operations.

use gitshell_exec::{quote, quote_all};

use crate::Repository;
use crate::error::{RepoError, Result};
use crate::repository::operand;

impl Repository {
    /// Stage `paths`, or every change in the working tree when `paths` is
    /// empty.
    pub fn add<S: AsRef<str>>(&self, paths: &[S]) -> Result<String> {
        if paths.is_empty() {
            return self.run("add -v --all");
        }
        self.run(&format!("add -v -- {}", quote_all(paths)))
    }

    /// Commit the index. With `all`, tracked modifications are staged first
    /// (`git commit -a`).
    pub fn commit(&self, message: &str, all: bool) -> Result<String> {
        let flags = if all { "-av" } else { "-v" };
        self.run(&format!("commit {flags} -m {}", quote(message)))
    }

    /// Remove `paths` from the working tree and the index, or from the index
    /// only when `cached` is set.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::MissingArgument`] if `paths` is empty.
    pub fn rm<S: AsRef<str>>(&self, paths: &[S], cached: bool) -> Result<String> {
        if paths.is_empty() {
            return Err(RepoError::MissingArgument("paths"));
        }
        let flag = if cached { " --cached" } else { "" };
        self.run(&format!("rm{flag} -- {}", quote_all(paths)))
    }

    /// Move the current branch, index and working tree to `revision`
    /// (`git reset --hard`).
    pub fn reset(&self, revision: &str) -> Result<String> {
        self.run(&format!("reset --hard {}", operand("revision", revision)?))
    }

    /// Commit the inverse of `revision` with git's default message.
    pub fn revert(&self, revision: &str) -> Result<String> {
        self.run(&format!("revert --no-edit {}", operand("revision", revision)?))
    }
}
