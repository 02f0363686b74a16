//! `gitsh add` and `gitsh commit`.

use anyhow::{Context, Result};

use crate::cli::{AddArgs, CommitArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_raw};

/// Execute the `gitsh add` command.
pub fn run_add(ctx: &RuntimeContext, args: &AddArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    let out = repo.add(args.paths.as_slice()).context("failed to stage changes")?;

    if ctx.json {
        let staged: Vec<&str> = out.lines().collect();
        output_json(&staged);
    } else if !ctx.quiet {
        output_raw(&out);
    }
    Ok(())
}

/// Execute the `gitsh commit` command.
pub fn run_commit(ctx: &RuntimeContext, args: &CommitArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    let out = repo
        .commit(&args.message, args.all)
        .context("failed to commit")?;

    if ctx.json {
        let head = repo.history(None, 1)?.into_iter().next();
        output_json(&head);
    } else if !ctx.quiet {
        output_raw(&out);
    }
    Ok(())
}
