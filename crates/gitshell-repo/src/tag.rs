use gitshell_exec::quote;

use crate::Repository;
use crate::error::Result;
use crate::repository::operand;

impl Repository {
    /// Create an annotated tag on `HEAD`. The message defaults to the tag
    /// name.
    pub fn add_tag(&self, name: &str, message: Option<&str>) -> Result<String> {
        let message = message.filter(|m| !m.is_empty()).unwrap_or(name);
        self.run(&format!("tag -a {} -m {}", operand("tag", name)?, quote(message)))
    }

    /// Tag names, optionally restricted to a `git tag -l` glob pattern.
    pub fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let args = match pattern.filter(|p| !p.is_empty()) {
            Some(pattern) => format!("tag -l {}", operand("tag pattern", pattern)?),
            None => "tag -l".to_string(),
        };
        Ok(self
            .run(&args)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
