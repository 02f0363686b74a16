//! `gitsh status` -- repository kind, active branch and `git status`.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_raw};

/// Execute the `gitsh status` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let repo = ctx.open_repo()?;
    let branch = if repo.is_bare() {
        None
    } else {
        repo.active_branch()?
    };

    if ctx.json {
        output_json(&serde_json::json!({
            "path": repo.path(),
            "kind": repo.kind().as_str(),
            "branch": branch,
        }));
        return Ok(());
    }

    println!("Repository: {} ({})", repo.path().display(), repo.kind().as_str());
    if let Some(branch) = &branch {
        println!("Branch:     {branch}");
    }
    if !repo.is_bare() && !ctx.quiet {
        println!();
        output_raw(&repo.status()?);
    }
    Ok(())
}
