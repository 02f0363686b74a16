//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what every command handler needs: the
//! repository directory, configuration sources, the environment overlay
//! and the output flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use gitshell_config::{ToolConfig, load_config, load_config_from_dir};
use gitshell_exec::EnvOverlay;
use gitshell_repo::Repository;
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Repository directory (`--repo`, default `.`).
    pub repo_path: PathBuf,

    /// Explicit config file (`--config`).
    pub config_file: Option<PathBuf>,

    /// Executable override (`--git`).
    pub git: Option<PathBuf>,

    /// Extra environment for git (`--env`).
    pub env: EnvOverlay,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// # Errors
    ///
    /// Fails if an `--env` value is not of the form `KEY=VALUE`.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        Ok(Self {
            repo_path: global.repo.clone().unwrap_or_else(|| PathBuf::from(".")),
            config_file: global.config.clone(),
            git: global.git.clone(),
            env: parse_env(&global.env)?,
            json: global.json,
            quiet: global.quiet,
        })
    }

    /// Resolve the tool configuration.
    ///
    /// Priority: `--git` > `GITSHELL_*` env > config file > defaults. The
    /// config file is `--config`, or one found in the repository directory.
    pub fn tool_config(&self) -> Result<ToolConfig> {
        let config = match &self.config_file {
            Some(file) => load_config(Some(file))
                .with_context(|| format!("failed to load config from {}", file.display()))?,
            None if self.repo_path.is_dir() => load_config_from_dir(&self.repo_path)
                .context("failed to load configuration")?,
            None => load_config(None).context("failed to load configuration")?,
        };
        let config = match &self.git {
            Some(bin) => config.with_bin(bin),
            None => config,
        };
        config.validate()?;
        debug!(bin = %config.bin.display(), "resolved tool configuration");
        Ok(config)
    }

    /// Open the repository at [`Self::repo_path`] with the overlay applied.
    pub fn open_repo(&self) -> Result<Repository> {
        let tool = self.tool_config()?;
        let repo = Repository::open(&self.repo_path, &tool).with_context(|| {
            format!("failed to open repository at {}", self.repo_path.display())
        })?;
        Ok(self.with_env(repo))
    }

    /// Create and initialize a repository at `path`.
    pub fn init_repo(&self, path: &Path) -> Result<Repository> {
        let tool = self.tool_config()?;
        let repo = Repository::init(path, &tool)
            .with_context(|| format!("failed to initialize repository at {}", path.display()))?;
        Ok(self.with_env(repo))
    }

    fn with_env(&self, mut repo: Repository) -> Repository {
        for (key, value) in self.env.iter() {
            repo.set_env(key, value);
        }
        repo
    }
}

/// Parse `KEY=VALUE` pairs into an overlay. Later duplicates win.
fn parse_env(pairs: &[String]) -> Result<EnvOverlay> {
    let mut overlay = EnvOverlay::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => overlay.set(key, value),
            _ => bail!("invalid --env value {pair:?}: expected KEY=VALUE"),
        }
    }
    Ok(overlay)
}
