//! `gitsh branches`, `gitsh branch` and `gitsh checkout`.

use anyhow::{Context, Result};

use crate::cli::{BranchArgs, BranchCommands, BranchesArgs, CheckoutArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, print_done, print_names};

/// Execute the `gitsh branches` command.
pub fn run_list(ctx: &RuntimeContext, args: &BranchesArgs) -> Result<()> {
    let repo = ctx.open_repo()?;

    let (branches, active) = if args.remote {
        (repo.list_remote_branches()?, None)
    } else {
        (repo.list_branches(false)?, repo.active_branch()?)
    };

    if ctx.json {
        output_json(&serde_json::json!({
            "branches": branches,
            "active": active,
        }));
    } else {
        print_names(&branches, active.as_deref());
    }
    Ok(())
}

/// Execute the `gitsh branch` command.
pub fn run(ctx: &RuntimeContext, args: &BranchArgs) -> Result<()> {
    let repo = ctx.open_repo()?;

    let message = match &args.command {
        BranchCommands::Create { name } => {
            repo.create_branch(name)
                .with_context(|| format!("failed to create branch {name}"))?;
            format!("Created branch {name}")
        }
        BranchCommands::Delete { name, force } => {
            repo.delete_branch(name, *force)
                .with_context(|| format!("failed to delete branch {name}"))?;
            format!("Deleted branch {name}")
        }
        BranchCommands::Merge { name } => {
            repo.merge(name)
                .with_context(|| format!("failed to merge {name}"))?;
            format!("Merged {name}")
        }
    };

    if ctx.json {
        output_json(&serde_json::json!({ "message": message }));
    } else {
        print_done(ctx.quiet, &message);
    }
    Ok(())
}

/// Execute the `gitsh checkout` command.
pub fn run_checkout(ctx: &RuntimeContext, args: &CheckoutArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    repo.checkout(&args.name)
        .with_context(|| format!("failed to check out {}", args.name))?;

    let active = repo.active_branch()?;
    if ctx.json {
        output_json(&serde_json::json!({ "active": active }));
    } else {
        print_done(ctx.quiet, &format!("Checked out {}", args.name));
    }
    Ok(())
}
