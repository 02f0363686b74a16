//! Environment overlay applied to spawned commands.

use std::collections::BTreeMap;
use std::process::Command;

/// Variables layered over the ambient process environment for each command.
///
/// Entries win over ambient variables of the same name. An empty overlay
/// leaves the inherited environment untouched. The ambient environment of
/// the current process is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    vars: BTreeMap<String, String>,
}

impl EnvOverlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any earlier entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Look up an overlay entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply the overlay to a command that otherwise inherits the ambient
    /// environment.
    pub(crate) fn apply(&self, cmd: &mut Command) {
        cmd.envs(&self.vars);
    }
}

impl<K, V> FromIterator<(K, V)> for EnvOverlay
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overlay = Self::new();
        for (k, v) in iter {
            overlay.set(k, v);
        }
        overlay
    }
}
