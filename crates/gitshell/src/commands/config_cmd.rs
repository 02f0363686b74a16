//! `gitsh config` -- print the effective tool configuration.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gitsh config` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let config = ctx.tool_config()?;

    if ctx.json {
        output_json(&config);
    } else {
        println!("bin:           {}", config.bin.display());
        println!(
            "bare_fallback: {}",
            serde_json::to_value(config.bare_fallback)?
                .as_str()
                .unwrap_or_default()
        );
        for (key, value) in ctx.env.iter() {
            println!("env:           {key}={value}");
        }
    }
    Ok(())
}
