//! `gitsh init` -- create a repository directory and initialize it.

use anyhow::Result;

use crate::cli::InitArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_done};

/// Execute the `gitsh init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let repo = ctx.init_repo(&args.path)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "path": repo.path(),
            "kind": repo.kind().as_str(),
        }));
    } else {
        print_done(
            ctx.quiet,
            &format!("Initialized repository in {}", repo.path().display()),
        );
    }
    Ok(())
}
