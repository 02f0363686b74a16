//! Writing the tree of a revision to a plain directory.

use std::fs;
use std::path::Path;

use gitshell_exec::quote;
use tracing::{debug, info};

use crate::Repository;
use crate::error::{RepoError, Result};
use crate::fsutil;
use crate::repository::operand;

impl Repository {
    /// Write every file of `revision` into `dir`, without git metadata.
    ///
    /// A relative `dir` is taken relative to the repository. The revision is
    /// resolved before anything is written; an existing `dir` is then
    /// removed and refilled from a scratch index. `HEAD`, the branches, the
    /// index and the working tree of the repository are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::MissingArgument`] for an empty `dir` or
    /// `revision`, [`RepoError::OptionLike`] for a revision starting with
    /// `-`, [`RepoError::NotADirectory`] if `dir` exists and is not a
    /// directory, or the failing git command (for example an unknown
    /// revision).
    pub fn export(&self, dir: &Path, revision: &str) -> Result<()> {
        if dir.as_os_str().is_empty() {
            return Err(RepoError::MissingArgument("export directory"));
        }
        if revision.is_empty() {
            return Err(RepoError::MissingArgument("revision"));
        }
        operand("revision", revision)?;

        let commit = self
            .run(&format!(
                "rev-parse --verify --quiet {}",
                quote(&format!("{revision}^{{commit}}"))
            ))?
            .trim()
            .to_string();
        debug!(revision, commit = %commit, "resolved export revision");

        let dir = self.path().join(dir);
        if dir.exists() && !fsutil::remove_dir(&dir)? {
            return Err(RepoError::NotADirectory(dir));
        }

        let scratch_dir = tempfile::Builder::new()
            .prefix("gitshell-export-")
            .tempdir()?;
        let mut scratch = self.clone();
        scratch.set_env(
            "GIT_INDEX_FILE",
            scratch_dir.path().join("index").to_string_lossy(),
        );
        if self.is_bare() {
            // checkout-index needs a work tree; borrow the target directory.
            fs::create_dir_all(&dir)?;
            scratch.set_env("GIT_DIR", self.path().to_string_lossy());
            scratch.set_env("GIT_WORK_TREE", dir.to_string_lossy());
        }

        scratch.run(&format!("read-tree {}", quote(&commit)))?;
        let prefix = format!("--prefix={}/", dir.to_string_lossy());
        scratch.run(&format!("checkout-index -a -f {}", quote(&prefix)))?;

        info!(revision, dir = %dir.display(), "exported revision");
        Ok(())
    }
}
