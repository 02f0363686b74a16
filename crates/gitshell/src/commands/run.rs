//! `gitsh run` -- run an arbitrary git command in the repository.

use anyhow::Result;
use gitshell_exec::quote_all;

use crate::cli::RunArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_raw};

/// Execute the `gitsh run` command.
///
/// Every argument is quoted, so each reaches git as exactly one word.
pub fn run(ctx: &RuntimeContext, args: &RunArgs) -> Result<()> {
    let repo = ctx.open_repo()?;
    let out = repo.run(&quote_all(args.args.as_slice()))?;

    if ctx.json {
        output_json(&serde_json::json!({ "stdout": out }));
    } else {
        output_raw(&out);
    }
    Ok(())
}
