//! [`Repository`]: a resolved repository handle.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use gitshell_config::{BareFallback, ToolConfig};
use gitshell_exec::{EnvOverlay, Runner};
use tracing::{debug, info};

use crate::detect::{RepoKind, detect_kind};
use crate::error::{RepoError, Result};

/// A git repository on disk, resolved to a working or bare store.
///
/// Git commands run with the repository path as their working directory,
/// using the executable named by the [`ToolConfig`] the handle was opened
/// with and the handle's environment overlay.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    kind: RepoKind,
    bare_fallback: BareFallback,
    runner: Runner,
}

impl Repository {
    /// Resolve an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotADirectory`] if `path` is not a directory, or
    /// [`RepoError::NotARepository`] if it cannot be classified (see
    /// [`detect_kind`]).
    pub fn open(path: impl AsRef<Path>, tool: &ToolConfig) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(RepoError::NotADirectory(path.to_path_buf()));
        }
        let path = path.canonicalize()?;
        let kind = detect_kind(&path, tool.bare_fallback)?;

        info!(path = %path.display(), kind = kind.as_str(), "opened repository");
        Ok(Self {
            runner: Runner::new(&path, &tool.bin),
            path,
            kind,
            bare_fallback: tool.bare_fallback,
        })
    }

    /// Create `path` and run `git init` in it.
    ///
    /// Nothing is left behind on failure: if `git init` fails, the freshly
    /// created directory is removed again.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::AlreadyExists`] if `path` exists,
    /// [`RepoError::MissingParent`] if its parent directory does not, or the
    /// git failure.
    pub fn init(path: impl AsRef<Path>, tool: &ToolConfig) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(RepoError::AlreadyExists(path.to_path_buf()));
        }
        let parent = match path.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => return Err(RepoError::MissingParent(path.to_path_buf())),
        };
        let parent = parent
            .canonicalize()
            .map_err(|_| RepoError::MissingParent(path.to_path_buf()))?;
        let Some(name) = path.file_name() else {
            return Err(RepoError::AlreadyExists(path.to_path_buf()));
        };
        let path = parent.join(name);

        fs::create_dir(&path)?;
        let runner = Runner::new(&path, &tool.bin);
        if let Err(err) = runner.run("init") {
            debug!(path = %path.display(), "git init failed; removing directory");
            let _ = fs::remove_dir_all(&path);
            return Err(err.into());
        }

        info!(path = %path.display(), "initialized repository");
        Ok(Self {
            path,
            kind: RepoKind::Working,
            bare_fallback: tool.bare_fallback,
            runner,
        })
    }

    /// Classify the directory again, e.g. after it was cloned into or
    /// initialized by another process.
    pub fn redetect(&mut self) -> Result<RepoKind> {
        self.kind = detect_kind(&self.path, self.bare_fallback)?;
        Ok(self.kind)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> RepoKind {
        self.kind
    }

    pub fn is_bare(&self) -> bool {
        self.kind == RepoKind::Bare
    }

    /// The environment overlay applied to every git command.
    pub fn env(&self) -> &EnvOverlay {
        self.runner.env()
    }

    /// Set an environment variable for every later git command.
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.runner.set_env(key, value);
    }

    /// Run `git <args>` in the repository and return its stdout.
    ///
    /// `args` is passed to the shell verbatim. Quote any value that did not
    /// come from this program with [`gitshell_exec::quote`].
    pub fn run(&self, args: &str) -> Result<String> {
        Ok(self.runner.run(args)?)
    }

    /// `git status`.
    pub fn status(&self) -> Result<String> {
        self.run("status")
    }

    /// The directory holding the repository internals: the repository path
    /// itself for a bare store, `.git` for a working tree.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::NotARepository`] if a working tree has no `.git`
    /// directory (for example when `.git` is a worktree link file).
    pub fn git_dir(&self) -> Result<PathBuf> {
        if self.is_bare() {
            return Ok(self.path.clone());
        }
        let git_dir = self.path.join(".git");
        if git_dir.is_dir() {
            Ok(git_dir)
        } else {
            Err(RepoError::NotARepository(self.path.clone()))
        }
    }

    /// Remove untracked files from the working tree.
    pub fn clean(&self, dirs: bool, force: bool) -> Result<String> {
        let mut args = String::from("clean");
        if force {
            args.push_str(" -f");
        }
        if dirs {
            args.push_str(" -d");
        }
        self.run(&args)
    }

    /// Read the repository description.
    pub fn description(&self) -> Result<String> {
        Ok(fs::read_to_string(self.git_dir()?.join("description"))?)
    }

    /// Replace the repository description.
    pub fn set_description(&self, description: &str) -> Result<()> {
        fs::write(self.git_dir()?.join("description"), description)?;
        Ok(())
    }

    /// Quoted form of the repository path for use in command lines.
    pub(crate) fn quoted_path(&self) -> String {
        gitshell_exec::quote(&self.path.to_string_lossy()).into_owned()
    }
}

/// Quote a caller-supplied operand that git must not parse as an option.
///
/// # Errors
///
/// Returns [`RepoError::OptionLike`] if `value` starts with `-`.
pub(crate) fn operand<'a>(what: &'static str, value: &'a str) -> Result<Cow<'a, str>> {
    if value.starts_with('-') {
        return Err(RepoError::OptionLike {
            what,
            value: value.to_string(),
        });
    }
    Ok(gitshell_exec::quote(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{init_repo, tool};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_missing_path() {
        let err = Repository::open("/nonexistent/directory/xyz", &tool()).unwrap_err();
        assert!(matches!(err, RepoError::NotADirectory(_)));
        assert!(err.is_precondition());
    }

    #[test]
    fn test_open_canonicalizes_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let repo = Repository::open(dir.path().join("sub/.."), &tool()).unwrap();
        assert_eq!(repo.path(), dir.path().canonicalize().unwrap());
        assert_eq!(repo.kind(), RepoKind::Working);
    }

    #[test]
    fn test_open_empty_dir_respects_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::open(dir.path(), &tool()).unwrap();
        assert!(repo.is_bare());

        let strict = tool().with_bare_fallback(BareFallback::Reject);
        let err = Repository::open(dir.path(), &strict).unwrap_err();
        assert!(matches!(err, RepoError::NotARepository(_)));
    }

    #[test]
    fn test_init_creates_working_repo() {
        let (_tmp, repo) = init_repo();
        assert_eq!(repo.kind(), RepoKind::Working);
        assert!(repo.path().join(".git").is_dir());
        assert_eq!(repo.git_dir().unwrap(), repo.path().join(".git"));
    }

    #[test]
    fn test_init_existing_path_fails_without_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let err = Repository::init(dir.path(), &tool()).unwrap_err();
        assert!(matches!(err, RepoError::AlreadyExists(_)));
        assert!(!dir.path().join(".git").exists());
    }

    #[test]
    fn test_init_missing_parent_fails_without_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("repo");
        let err = Repository::init(&target, &tool()).unwrap_err();
        assert!(matches!(err, RepoError::MissingParent(_)));
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_init_failure_removes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("repo");
        let broken = tool().with_bin("/nonexistent/bin/git");
        let err = Repository::init(&target, &broken).unwrap_err();
        assert!(err.is_command_failure());
        assert!(!target.exists());
    }

    #[test]
    fn test_redetect_after_external_init() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = Repository::open(dir.path(), &tool()).unwrap();
        assert!(repo.is_bare());

        repo.run("init").unwrap();
        assert_eq!(repo.redetect().unwrap(), RepoKind::Working);
        assert!(!repo.is_bare());
    }

    #[test]
    fn test_bare_git_dir_is_the_path() {
        let (tmp, _repo) = init_repo();
        let bare_path = tmp.path().join("store.git");
        fs::create_dir(&bare_path).unwrap();
        let mut bare = Repository::open(&bare_path, &tool()).unwrap();
        bare.run("init --bare").unwrap();
        assert_eq!(bare.redetect().unwrap(), RepoKind::Bare);
        assert_eq!(bare.git_dir().unwrap(), bare.path());

        // A freshly opened handle sees the store's config file.
        let reopened = Repository::open(&bare_path, &tool().with_bare_fallback(BareFallback::Reject))
            .unwrap();
        assert!(reopened.is_bare());
    }

    #[test]
    fn test_env_overlay_reaches_git() {
        let (_tmp, mut repo) = init_repo();
        repo.set_env("GIT_AUTHOR_NAME", "Overlay Author");
        assert_eq!(repo.env().get("GIT_AUTHOR_NAME"), Some("Overlay Author"));
        let ident = repo.run("var GIT_AUTHOR_IDENT").unwrap();
        assert!(ident.starts_with("Overlay Author <"), "unexpected ident: {ident}");
    }

    #[test]
    fn test_run_failure_is_command_failure() {
        let (_tmp, repo) = init_repo();
        let err = repo.run("not-a-real-subcommand").unwrap_err();
        assert!(err.is_command_failure());
        assert!(!err.stderr().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_status_and_clean() {
        let (_tmp, repo) = init_repo();
        fs::write(repo.path().join("junk.txt"), "x").unwrap();
        fs::create_dir(repo.path().join("junkdir")).unwrap();
        fs::write(repo.path().join("junkdir/inner.txt"), "x").unwrap();

        let status = repo.status().unwrap();
        assert!(status.contains("junk.txt"), "status: {status}");

        repo.clean(true, true).unwrap();
        assert!(!repo.path().join("junk.txt").exists());
        assert!(!repo.path().join("junkdir").exists());
    }

    #[test]
    fn test_description_roundtrip() {
        let (_tmp, repo) = init_repo();
        repo.set_description("Project description\n").unwrap();
        assert_eq!(repo.description().unwrap(), "Project description\n");
    }

    #[test]
    fn test_operand_quotes_or_rejects() {
        assert_eq!(operand("revision", "HEAD~1").unwrap(), "'HEAD~1'");
        assert_eq!(operand("branch", "a-b").unwrap(), "a-b");
        let err = operand("branch", "-D").unwrap_err();
        assert!(matches!(err, RepoError::OptionLike { what: "branch", .. }));
    }
}
