//! `gitsh log` and `gitsh files`.

use anyhow::{Context, Result};

use crate::cli::{FilesArgs, LogArgs};
use crate::context::RuntimeContext;
use crate::output::{format_change, format_commit, output_json, supports_color};

/// Execute the `gitsh log` command.
pub fn run(ctx: &RuntimeContext, args: &LogArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    let commits = repo
        .history(args.revision.as_deref(), args.count)
        .context("failed to read history")?;

    if ctx.json {
        output_json(&commits);
        return Ok(());
    }

    let color = supports_color();
    let blocks: Vec<String> = commits.iter().map(|c| format_commit(c, color)).collect();
    print!("{}", blocks.join("\n"));
    Ok(())
}

/// Execute the `gitsh files` command.
pub fn run_files(ctx: &RuntimeContext, args: &FilesArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    let changes = repo
        .version_files(&args.revision)
        .with_context(|| format!("failed to list files of {}", args.revision))?;

    if ctx.json {
        output_json(&changes);
        return Ok(());
    }

    let color = supports_color();
    for change in &changes {
        println!("{}", format_change(change, color));
    }
    Ok(())
}
