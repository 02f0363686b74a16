//! Tool configuration and loading.
//!
//! Values are merged in increasing priority from [`ToolConfig::default`],
//! an optional `gitshell.yaml`/`gitshell.toml` file, and environment
//! variables prefixed with `GITSHELL_` (`GITSHELL_BIN`,
//! `GITSHELL_BARE_FALLBACK`).

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The merged configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default location of the git executable.
pub const DEFAULT_BIN: &str = "/usr/bin/git";

/// Executable name resolved through `PATH` in path-lookup mode.
pub const PATH_LOOKUP_BIN: &str = "git";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "GITSHELL_";

/// File names searched for by [`find_config_file`], in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["gitshell.yaml", "gitshell.yml", "gitshell.toml"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How to classify a directory that has neither a `.git` entry nor a store
/// `config` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BareFallback {
    /// Treat it as a bare repository.
    #[default]
    AssumeBare,
    /// Refuse to open it.
    Reject,
}

/// Which git executable to run and how to resolve repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Path to the git executable, or a bare name looked up on `PATH`.
    #[serde(default = "default_bin")]
    pub bin: PathBuf,

    /// Classification of directories that do not look like a repository.
    #[serde(default)]
    pub bare_fallback: BareFallback,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            bin: default_bin(),
            bare_fallback: BareFallback::default(),
        }
    }
}

fn default_bin() -> PathBuf {
    PathBuf::from(DEFAULT_BIN)
}

impl ToolConfig {
    /// A configuration that runs `git` from `PATH` instead of a fixed path.
    ///
    /// Useful on systems where git is not installed at [`DEFAULT_BIN`],
    /// such as Windows.
    pub fn path_lookup() -> Self {
        Self {
            bin: PathBuf::from(PATH_LOOKUP_BIN),
            ..Self::default()
        }
    }

    /// Replace the executable path.
    pub fn with_bin(mut self, bin: impl Into<PathBuf>) -> Self {
        self.bin = bin.into();
        self
    }

    /// Replace the bare-directory fallback policy.
    pub fn with_bare_fallback(mut self, fallback: BareFallback) -> Self {
        self.bare_fallback = fallback;
        self
    }

    /// Check that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `bin` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.bin.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "bin".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the layered [`Figment`] for an optional config file.
///
/// Files ending in `.toml` are read as TOML, anything else as YAML.
pub fn figment(file: Option<&Path>) -> Figment {
    let mut fig = Figment::from(Serialized::defaults(ToolConfig::default()));
    if let Some(path) = file {
        fig = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => fig.merge(Toml::file(path)),
            _ => fig.merge(Yaml::file(path)),
        };
    }
    fig.merge(Env::prefixed(ENV_PREFIX))
}

/// Load configuration, optionally from an explicit file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `file` is given but does not
/// exist, [`ConfigError::Load`] if a source contains invalid data, or
/// [`ConfigError::InvalidValue`] if validation fails.
pub fn load_config(file: Option<&Path>) -> Result<ToolConfig> {
    if let Some(path) = file {
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
    }

    let config: ToolConfig = figment(file).extract()?;
    config.validate()?;
    Ok(config)
}

/// Look for one of [`CONFIG_FILE_NAMES`] directly inside `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Load configuration using the config file found in `dir`, if any.
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_from_dir(dir: &Path) -> Result<ToolConfig> {
    load_config(find_config_file(dir).as_deref())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    fn jailed(result: Result<ToolConfig>) -> std::result::Result<ToolConfig, figment::Error> {
        result.map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn test_default_config() {
        let cfg = ToolConfig::default();
        assert_eq!(cfg.bin, PathBuf::from("/usr/bin/git"));
        assert_eq!(cfg.bare_fallback, BareFallback::AssumeBare);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_path_lookup_uses_bare_name() {
        let cfg = ToolConfig::path_lookup();
        assert_eq!(cfg.bin, PathBuf::from("git"));
        assert_eq!(cfg.bare_fallback, BareFallback::AssumeBare);
    }

    #[test]
    fn test_builders() {
        let cfg = ToolConfig::default()
            .with_bin("/opt/git/bin/git")
            .with_bare_fallback(BareFallback::Reject);
        assert_eq!(cfg.bin, PathBuf::from("/opt/git/bin/git"));
        assert_eq!(cfg.bare_fallback, BareFallback::Reject);
    }

    #[test]
    fn test_empty_bin_is_invalid() {
        let err = ToolConfig::default().with_bin("").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "bin"));
    }

    #[test]
    fn test_load_without_sources_returns_default() {
        Jail::expect_with(|_jail| {
            let cfg = jailed(load_config(None))?;
            assert_eq!(cfg, ToolConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_yaml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "gitshell.yaml",
                "bin: /opt/git/bin/git\nbare_fallback: reject\n",
            )?;
            let cfg = jailed(load_config(Some(Path::new("gitshell.yaml"))))?;
            assert_eq!(cfg.bin, PathBuf::from("/opt/git/bin/git"));
            assert_eq!(cfg.bare_fallback, BareFallback::Reject);
            Ok(())
        });
    }

    #[test]
    fn test_load_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("gitshell.toml", "bin = \"git\"\n")?;
            let cfg = jailed(load_config(Some(Path::new("gitshell.toml"))))?;
            assert_eq!(cfg.bin, PathBuf::from("git"));
            assert_eq!(cfg.bare_fallback, BareFallback::AssumeBare);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("gitshell.yaml", "bin: /from/file/git\n")?;
            jail.set_env("GITSHELL_BIN", "/from/env/git");
            jail.set_env("GITSHELL_BARE_FALLBACK", "reject");
            let cfg = jailed(load_config(Some(Path::new("gitshell.yaml"))))?;
            assert_eq!(cfg.bin, PathBuf::from("/from/env/git"));
            assert_eq!(cfg.bare_fallback, BareFallback::Reject);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_fallback_is_load_error() {
        Jail::expect_with(|jail| {
            jail.create_file("gitshell.yaml", "bare_fallback: sometimes\n")?;
            let result = load_config(Some(Path::new("gitshell.yaml")));
            assert!(matches!(result, Err(ConfigError::Load(_))));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some(Path::new("/nonexistent/gitshell.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn test_find_config_file_order() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_config_file(dir.path()), None);

        std::fs::write(dir.path().join("gitshell.toml"), "").unwrap();
        assert_eq!(
            find_config_file(dir.path()),
            Some(dir.path().join("gitshell.toml"))
        );

        std::fs::write(dir.path().join("gitshell.yaml"), "").unwrap();
        assert_eq!(
            find_config_file(dir.path()),
            Some(dir.path().join("gitshell.yaml"))
        );
    }

    #[test]
    fn test_load_config_from_dir() {
        Jail::expect_with(|jail| {
            jail.create_file("gitshell.yml", "bin: /usr/local/bin/git\n")?;
            let cfg = jailed(load_config_from_dir(jail.directory()))?;
            assert_eq!(cfg.bin, PathBuf::from("/usr/local/bin/git"));
            Ok(())
        });
    }
}
