//! `gitsh version`: the gitsh release plus the git it drives.

use anyhow::Result;
use gitshell_exec::Runner;
use tracing::debug;

use crate::context::RuntimeContext;
use crate::output::output_json;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stamped by release builds through `GITSHELL_BUILD`.
const BUILD: &str = match option_env!("GITSHELL_BUILD") {
    Some(build) => build,
    None => "dev",
};

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let platform = format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH);
    let git = git_version(ctx);

    if ctx.json {
        output_json(&serde_json::json!({
            "version": VERSION,
            "build": BUILD,
            "platform": platform,
            "git": git,
        }));
        return Ok(());
    }

    println!("gitsh version {VERSION} ({BUILD}) {platform}");
    match git {
        Some(git) => println!("{git}"),
        None => println!("git: not available"),
    }
    Ok(())
}

/// First line of `<git> --version` for the configured executable, or
/// `None` when it cannot be run.
fn git_version(ctx: &RuntimeContext) -> Option<String> {
    let tool = ctx.tool_config().ok()?;
    let runner = Runner::new(std::env::temp_dir(), &tool.bin);
    match runner.run("--version") {
        Ok(out) => out.lines().next().map(|line| line.trim().to_string()),
        Err(err) => {
            debug!(error = %err, "git --version failed");
            None
        }
    }
}
