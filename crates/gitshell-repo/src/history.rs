//! Commit history.

use gitshell_exec::quote;
use gitshell_log::{Commit, FileChange, LOG_FORMAT};
use tracing::debug;

use crate::Repository;
use crate::error::Result;
use crate::repository::operand;

impl Repository {
    /// Raw `git log -<count>` output, optionally with a custom
    /// `--pretty=format:` string.
    pub fn log(&self, format: Option<&str>, count: usize) -> Result<String> {
        let mut args = format!("log -{count}");
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            args.push_str(" --pretty=format:");
            args.push_str(&quote(format));
        }
        self.run(&args)
    }

    /// One-line summary of the newest commit.
    pub fn first_log(&self) -> Result<String> {
        self.run("log -1 --abbrev-commit --pretty=oneline")
    }

    /// The newest `count` commits reachable from `revision` (or `HEAD`),
    /// each with the files it touched.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::OptionLike`](crate::RepoError::OptionLike) if
    /// `revision` starts with `-`.
    pub fn history(&self, revision: Option<&str>, count: usize) -> Result<Vec<Commit>> {
        let mut args = String::from("log");
        if let Some(revision) = revision.filter(|r| !r.is_empty()) {
            args.push(' ');
            args.push_str(&operand("revision", revision)?);
        }
        args.push_str(&format!(
            " -{count} --name-status --pretty=format:{} --abbrev-commit",
            quote(LOG_FORMAT)
        ));

        let commits = gitshell_log::parse(&self.run(&args)?)?;
        debug!(count = commits.len(), "parsed history");
        Ok(commits)
    }

    /// Files changed by the commit at `revision`.
    pub fn version_files(&self, revision: &str) -> Result<Vec<FileChange>> {
        Ok(self
            .history(Some(revision), 1)?
            .into_iter()
            .next()
            .map(|commit| commit.changes)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::RepoError;
    use crate::testutil::{commit_file, init_repo};
    use gitshell_log::ChangeKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_history_records_changes() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a", "Add a");
        commit_file(&repo, "dir/b.txt", "b", "Add b");
        commit_file(&repo, "a.txt", "a2", "Touch a");

        let history = repo.history(None, 10).unwrap();
        let messages: Vec<_> = history.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["Touch a", "Add b", "Add a"]);

        for commit in &history {
            assert_eq!(commit.author, "Test User");
            assert!(!commit.revision.is_empty());
            assert!(!commit.date.is_empty());
        }
        assert_eq!(history[0].changes[0].action, "M");
        assert_eq!(history[0].changes[0].path, "a.txt");
        assert_eq!(history[1].changes[0].path, "dir/b.txt");
        assert_eq!(history[1].changes[0].kind(), ChangeKind::Added);
        assert!(history[0].decoration.as_deref().unwrap_or_default().contains("HEAD"));
    }

    #[test]
    fn test_history_count_and_revision() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a", "One");
        commit_file(&repo, "b.txt", "b", "Two");
        commit_file(&repo, "c.txt", "c", "Three");

        let latest = repo.history(None, 2).unwrap();
        assert_eq!(latest.len(), 2);

        let older = repo.history(Some("HEAD~1"), 10).unwrap();
        let messages: Vec<_> = older.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["Two", "One"]);
    }

    #[test]
    fn test_history_rename_and_spaces() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "old name.txt", "same contents\n", "Add");
        repo.run("mv 'old name.txt' 'new name.txt'").unwrap();
        repo.commit("Rename", false).unwrap();

        let changes = repo.version_files("HEAD").unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind(), ChangeKind::Renamed);
        assert_eq!(changes[0].from.as_deref(), Some("old name.txt"));
        assert_eq!(changes[0].path, "new name.txt");
    }

    #[test]
    fn test_version_files_lists_every_path() {
        let (_tmp, repo) = init_repo();
        std::fs::write(repo.path().join("x.txt"), "x").unwrap();
        std::fs::write(repo.path().join("y.txt"), "y").unwrap();
        repo.add::<&str>(&[]).unwrap();
        repo.commit("Two files", false).unwrap();

        let paths: Vec<_> = repo
            .version_files("HEAD")
            .unwrap()
            .into_iter()
            .map(|c| c.path)
            .collect();
        assert_eq!(paths, vec!["x.txt", "y.txt"]);
    }

    #[test]
    fn test_empty_commit_in_history() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a", "First");
        repo.run("commit --allow-empty -m Empty").unwrap();
        commit_file(&repo, "b.txt", "b", "Third");

        let history = repo.history(None, 10).unwrap();
        let messages: Vec<_> = history.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["Third", "Empty", "First"]);
        assert!(history[1].changes.is_empty());
        assert_eq!(history[2].changes.len(), 1);
    }

    #[test]
    fn test_raw_log_and_first_log() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a", "First");
        commit_file(&repo, "b.txt", "b", "Second");

        assert_eq!(repo.log(Some("%s"), 5).unwrap(), "Second\nFirst");
        assert!(repo.log(None, 1).unwrap().contains("Author: Test User"));
        assert!(repo.first_log().unwrap().trim_end().ends_with("Second"));
    }

    #[test]
    fn test_history_of_empty_repo_fails() {
        let (_tmp, repo) = init_repo();
        let err = repo.history(None, 5).unwrap_err();
        assert!(err.is_command_failure());
    }

    #[test]
    fn test_option_like_revision_is_rejected() {
        let (tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a", "First");
        let target = tmp.path().join("written-by-git");

        let revision = format!("--output={}", target.display());
        let err = repo.history(Some(&revision), 1).unwrap_err();
        assert!(matches!(err, RepoError::OptionLike { what: "revision", .. }));
        assert!(err.is_precondition());
        assert!(!target.exists());

        assert!(repo.version_files("--all").is_err());
    }
}
