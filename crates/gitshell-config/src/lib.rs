//! Configuration management for gitshell.
//!
//! This crate defines [`ToolConfig`](config::ToolConfig), the explicit value
//! that tells the rest of gitshell which git executable to run and how to
//! classify directories that do not look like a repository, and loads it
//! from defaults, an optional config file and `GITSHELL_*` variables.

pub mod config;

pub use config::{BareFallback, ConfigError, ToolConfig, load_config, load_config_from_dir};
