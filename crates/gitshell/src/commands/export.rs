//! `gitsh export` -- write the tree of a revision to a directory.

use anyhow::{Context, Result};

use crate::cli::ExportArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_done};

/// Execute the `gitsh export` command.
pub fn run(ctx: &RuntimeContext, args: &ExportArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    repo.export(&args.dir, &args.revision).with_context(|| {
        format!("failed to export {} to {}", args.revision, args.dir.display())
    })?;

    let dir = repo.path().join(&args.dir);
    if ctx.json {
        output_json(&serde_json::json!({
            "revision": args.revision,
            "dir": dir,
        }));
    } else {
        print_done(
            ctx.quiet,
            &format!("Exported {} to {}", args.revision, dir.display()),
        );
    }
    Ok(())
}
