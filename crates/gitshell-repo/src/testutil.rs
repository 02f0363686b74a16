//! Scratch repositories for tests.

use std::fs;

use gitshell_config::ToolConfig;
use tempfile::TempDir;

use crate::Repository;

/// Run git from `PATH` so tests do not depend on `/usr/bin/git`.
pub(crate) fn tool() -> ToolConfig {
    ToolConfig::path_lookup()
}

/// Give git a fixed identity and keep user/system config out of the way.
pub(crate) fn isolate(repo: &mut Repository) {
    repo.set_env("GIT_AUTHOR_NAME", "Test User");
    repo.set_env("GIT_AUTHOR_EMAIL", "test@example.com");
    repo.set_env("GIT_COMMITTER_NAME", "Test User");
    repo.set_env("GIT_COMMITTER_EMAIL", "test@example.com");
    repo.set_env("GIT_CONFIG_NOSYSTEM", "1");
    repo.set_env("GIT_CONFIG_GLOBAL", "/dev/null");
}

/// A fresh working repository at `<tmp>/repo`.
pub(crate) fn init_repo() -> (TempDir, Repository) {
    let tmp = TempDir::new().unwrap();
    let mut repo = Repository::init(tmp.path().join("repo"), &tool()).unwrap();
    isolate(&mut repo);
    (tmp, repo)
}

/// Write `name`, stage it and commit it.
pub(crate) fn commit_file(repo: &Repository, name: &str, contents: &str, message: &str) {
    let file = repo.path().join(name);
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file, contents).unwrap();
    repo.add(&[name]).unwrap();
    repo.commit(message, false).unwrap();
}
