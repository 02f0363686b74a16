//! Clone, fetch, pull and push.

use std::path::Path;

use crate::Repository;
use crate::error::{RepoError, Result};
use crate::repository::operand;

impl Repository {
    /// Clone this repository into `target` with `git clone --local`.
    pub fn clone_to(&self, target: &Path) -> Result<String> {
        self.run(&format!(
            "clone --local {} {}",
            self.quoted_path(),
            operand("clone target", &target.to_string_lossy())?
        ))
    }

    /// Clone the local repository at `source` into this handle's directory,
    /// which must be empty, then re-detect the repository type.
    pub fn clone_from(&mut self, source: &str) -> Result<String> {
        let out = self.run(&format!(
            "clone --local {} {}",
            operand("clone source", source)?,
            self.quoted_path()
        ))?;
        self.redetect()?;
        Ok(out)
    }

    /// Clone `source` (usually a URL) into this handle's directory, then
    /// re-detect the repository type. With a `reference` repository, objects
    /// already present there are borrowed instead of transferred.
    pub fn clone_remote(&mut self, source: &str, reference: Option<&str>) -> Result<String> {
        let mut args = String::from("clone");
        if let Some(reference) = reference.filter(|r| !r.is_empty()) {
            args.push_str(" --reference ");
            args.push_str(&operand("reference repository", reference)?);
        }
        let out = self.run(&format!(
            "{args} {} {}",
            operand("clone source", source)?,
            self.quoted_path()
        ))?;
        self.redetect()?;
        Ok(out)
    }

    /// `git fetch`.
    pub fn fetch(&self) -> Result<String> {
        self.run("fetch")
    }

    /// `git pull <remote> <remote_branch>[:<local_branch>]`.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::MissingArgument`] if `remote_branch` is empty.
    pub fn pull(
        &self,
        remote: &str,
        remote_branch: &str,
        local_branch: Option<&str>,
    ) -> Result<String> {
        if remote_branch.is_empty() {
            return Err(RepoError::MissingArgument("remote branch"));
        }
        let refspec = match local_branch.filter(|b| !b.is_empty()) {
            Some(local) => format!("{remote_branch}:{local}"),
            None => remote_branch.to_string(),
        };

        let mut args = String::from("pull");
        if !remote.is_empty() {
            args.push(' ');
            args.push_str(&operand("remote", remote)?);
        }
        args.push(' ');
        args.push_str(&operand("remote branch", &refspec)?);
        self.run(&args)
    }

    /// `git push [<remote> [<branch>]]`.
    pub fn push(&self, remote: &str, branch: &str) -> Result<String> {
        let mut args = String::from("push");
        for (what, part) in [("remote", remote), ("branch", branch)] {
            if !part.is_empty() {
                args.push(' ');
                args.push_str(&operand(what, part)?);
            }
        }
        self.run(&args)
    }
}
