//! `gitsh` -- structured access to git repositories.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(130);
    });

    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("gitshell=debug,gitsh=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| match &cli.command {
        Some(Commands::Init(args)) => commands::init::run(&ctx, args),
        Some(Commands::Status) => commands::status::run(&ctx),
        Some(Commands::Config) => commands::config_cmd::run(&ctx),
        Some(Commands::Branches(args)) => commands::branch::run_list(&ctx, args),
        Some(Commands::Branch(args)) => commands::branch::run(&ctx, args),
        Some(Commands::Checkout(args)) => commands::branch::run_checkout(&ctx, args),
        Some(Commands::Tags(args)) => commands::tag::run_list(&ctx, args),
        Some(Commands::Tag(args)) => commands::tag::run(&ctx, args),
        Some(Commands::Add(args)) => commands::staging::run_add(&ctx, args),
        Some(Commands::Commit(args)) => commands::staging::run_commit(&ctx, args),
        Some(Commands::Log(args)) => commands::log::run(&ctx, args),
        Some(Commands::Files(args)) => commands::log::run_files(&ctx, args),
        Some(Commands::Export(args)) => commands::export::run(&ctx, args),
        Some(Commands::Run(args)) => commands::run::run(&ctx, args),
        Some(Commands::Completion(args)) => commands::completion::run(args),
        Some(Commands::Version) => commands::version::run(&ctx),
        None => {
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    });

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
