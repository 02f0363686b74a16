//! Branch operations.

use crate::Repository;
use crate::error::Result;
use crate::repository::operand;

const ACTIVE_MARKER: &str = "* ";
const REMOTE_HEAD_ALIAS: &str = "HEAD -> ";
const DETACHED_PREFIX: &str = "(";

impl Repository {
    /// `git branch <name>`.
    pub fn create_branch(&self, name: &str) -> Result<String> {
        self.run(&format!("branch {}", operand("branch", name)?))
    }

    /// `git branch -d <name>`, or `-D` when `force` is set (deletes even
    /// unmerged branches).
    pub fn delete_branch(&self, name: &str, force: bool) -> Result<String> {
        let flag = if force { "-D" } else { "-d" };
        self.run(&format!("branch {flag} {}", operand("branch", name)?))
    }

    /// Local branch names. The active branch keeps its `* ` marker when
    /// `keep_asterisk` is set.
    pub fn list_branches(&self, keep_asterisk: bool) -> Result<Vec<String>> {
        Ok(parse_branches(&self.run("branch")?, keep_asterisk))
    }

    /// Remote-tracking branch names, without the `origin/HEAD -> ...` alias.
    pub fn list_remote_branches(&self) -> Result<Vec<String>> {
        Ok(parse_remote_branches(&self.run("branch -r")?))
    }

    /// The checked-out branch, or `None` before the first commit and while
    /// `HEAD` is detached.
    pub fn active_branch(&self) -> Result<Option<String>> {
        Ok(self
            .list_branches(true)?
            .into_iter()
            .find_map(|b| b.strip_prefix(ACTIVE_MARKER).map(str::to_string))
            .filter(|name| !name.starts_with(DETACHED_PREFIX)))
    }

    /// `git checkout <name>`.
    pub fn checkout(&self, name: &str) -> Result<String> {
        self.run(&format!("checkout {}", operand("branch", name)?))
    }

    /// Merge `name` into the current branch, always creating a merge commit.
    pub fn merge(&self, name: &str) -> Result<String> {
        self.run(&format!("merge {} --no-ff", operand("branch", name)?))
    }
}

fn parse_branches(output: &str, keep_asterisk: bool) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix(ACTIVE_MARKER) {
            Some(name) if !keep_asterisk => name.to_string(),
            _ => line.to_string(),
        })
        .collect()
}

fn parse_remote_branches(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(REMOTE_HEAD_ALIAS))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RepoError;
    use crate::testutil::{commit_file, init_repo};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_branches() {
        let out = "  develop\n* main\n  topic/x\n\n";
        assert_eq!(parse_branches(out, false), vec!["develop", "main", "topic/x"]);
        assert_eq!(parse_branches(out, true), vec!["develop", "* main", "topic/x"]);
        assert_eq!(parse_branches("", false), Vec::<String>::new());
    }

    #[test]
    fn test_parse_remote_branches() {
        let out = "  origin/HEAD -> origin/main\n  origin/main\n  origin/dev\n";
        assert_eq!(parse_remote_branches(out), vec!["origin/main", "origin/dev"]);
    }

    #[test]
    fn test_branch_lifecycle() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "README.md", "hello\n", "Initial commit");
        let main = repo.active_branch().unwrap().expect("active branch");

        repo.create_branch("feature/login").unwrap();
        let branches = repo.list_branches(false).unwrap();
        assert!(branches.contains(&"feature/login".to_string()));
        assert!(branches.contains(&main));

        repo.checkout("feature/login").unwrap();
        assert_eq!(repo.active_branch().unwrap().as_deref(), Some("feature/login"));
        assert!(
            repo.list_branches(true)
                .unwrap()
                .contains(&"* feature/login".to_string())
        );

        repo.checkout(&main).unwrap();
        repo.delete_branch("feature/login", false).unwrap();
        assert!(!repo.list_branches(false).unwrap().contains(&"feature/login".to_string()));
    }

    #[test]
    fn test_unmerged_branch_needs_force() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a\n", "First");
        let main = repo.active_branch().unwrap().unwrap();

        repo.create_branch("wip").unwrap();
        repo.checkout("wip").unwrap();
        commit_file(&repo, "b.txt", "b\n", "Unmerged work");
        repo.checkout(&main).unwrap();

        let err = repo.delete_branch("wip", false).unwrap_err();
        assert!(err.is_command_failure());
        repo.delete_branch("wip", true).unwrap();
    }

    #[test]
    fn test_merge_creates_merge_commit() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a\n", "First");
        let main = repo.active_branch().unwrap().unwrap();

        repo.create_branch("topic").unwrap();
        repo.checkout("topic").unwrap();
        commit_file(&repo, "b.txt", "b\n", "Topic work");
        repo.checkout(&main).unwrap();
        repo.merge("topic").unwrap();

        let history = repo.history(None, 3).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history[0].message.starts_with("Merge branch"));
        assert!(history[0].changes.is_empty());
        assert!(repo.path().join("b.txt").exists());
    }

    #[test]
    fn test_hostile_branch_name_is_not_executed() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a\n", "First");
        let marker = repo.path().join("pwned");

        let err = repo.create_branch("x; touch pwned").unwrap_err();
        assert!(err.is_command_failure());
        assert!(!marker.exists());
    }

    #[test]
    fn test_no_remote_branches_in_fresh_repo() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a\n", "First");
        assert_eq!(repo.list_remote_branches().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_active_branch_none_when_detached() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "1", "First");
        commit_file(&repo, "a.txt", "2", "Second");
        repo.checkout("HEAD~1").unwrap();
        assert_eq!(repo.active_branch().unwrap(), None);
    }

    #[test]
    fn test_active_branch_none_before_first_commit() {
        let (_tmp, repo) = init_repo();
        assert_eq!(repo.active_branch().unwrap(), None);
    }

    #[test]
    fn test_option_like_branch_names_are_rejected() {
        let (_tmp, repo) = init_repo();
        commit_file(&repo, "a.txt", "a\n", "First");
        let active = repo.active_branch().unwrap();

        for result in [
            repo.create_branch("--help"),
            repo.delete_branch("-r", false),
            repo.delete_branch("--all", true),
            repo.checkout("--orphan=empty"),
            repo.merge("--abort"),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(err, RepoError::OptionLike { what: "branch", .. }));
        }
        assert_eq!(repo.list_branches(false).unwrap().len(), 1);
        assert_eq!(repo.active_branch().unwrap(), active);
    }
}
