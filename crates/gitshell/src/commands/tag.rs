//! `gitsh tags` and `gitsh tag`.

use anyhow::{Context, Result};

use crate::cli::{TagArgs, TagsArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, print_done, print_names};

/// Execute the `gitsh tags` command.
pub fn run_list(ctx: &RuntimeContext, args: &TagsArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    let tags = repo.list_tags(args.pattern.as_deref())?;

    if ctx.json {
        output_json(&tags);
    } else {
        print_names(&tags, None);
    }
    Ok(())
}

/// Execute the `gitsh tag` command.
pub fn run(ctx: &RuntimeContext, args: &TagArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    repo.add_tag(&args.name, args.message.as_deref())
        .with_context(|| format!("failed to create tag {}", args.name))?;

    if ctx.json {
        output_json(&serde_json::json!({ "tag": args.name }));
    } else {
        print_done(ctx.quiet, &format!("Tagged {}", args.name));
    }
    Ok(())
}
