//! Clap CLI definitions for the `gitsh` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// gitsh -- structured access to git repositories.
///
/// Runs the git command-line tool against a repository and prints branch
/// lists, tags and commit history as text or JSON.
#[derive(Parser, Debug)]
#[command(
    name = "gitsh",
    about = "Structured access to git repositories",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Repository directory (default: current directory).
    #[arg(short = 'C', long, global = true, env = "GITSHELL_REPO")]
    pub repo: Option<PathBuf>,

    /// git executable to run (overrides the config file and GITSHELL_BIN).
    #[arg(long, global = true)]
    pub git: Option<PathBuf>,

    /// Config file (default: gitshell.yaml/.yml/.toml in the repository).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra environment variable for git, as KEY=VALUE. Repeatable.
    #[arg(short = 'e', long = "env", global = true, value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Repository =====
    /// Create a new repository directory and run `git init` in it.
    Init(InitArgs),

    /// Show the repository kind and `git status`.
    Status,

    /// Print the effective tool configuration.
    Config,

    // ===== Branches & Tags =====
    /// List local (or remote-tracking) branches.
    Branches(BranchesArgs),

    /// Create, delete or merge a branch.
    Branch(BranchArgs),

    /// Check out a branch or revision.
    Checkout(CheckoutArgs),

    /// List tags.
    Tags(TagsArgs),

    /// Create an annotated tag on HEAD.
    Tag(TagArgs),

    // ===== Changes =====
    /// Stage files (all changes when no path is given).
    Add(AddArgs),

    /// Commit staged changes.
    Commit(CommitArgs),

    // ===== History =====
    /// Show commit history with changed files.
    Log(LogArgs),

    /// List the files changed by one commit.
    Files(FilesArgs),

    /// Write the tree of a revision to a directory.
    Export(ExportArgs),

    // ===== Utilities =====
    /// Run an arbitrary git command in the repository.
    Run(RunArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

/// Arguments for `gitsh init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create. Its parent must exist.
    pub path: PathBuf,
}

/// Arguments for `gitsh branches`.
#[derive(Args, Debug)]
pub struct BranchesArgs {
    /// List remote-tracking branches instead.
    #[arg(short, long)]
    pub remote: bool,
}

/// Arguments for `gitsh branch`.
#[derive(Args, Debug)]
pub struct BranchArgs {
    #[command(subcommand)]
    pub command: BranchCommands,
}

/// Branch subcommands.
#[derive(Subcommand, Debug)]
pub enum BranchCommands {
    /// Create a branch at HEAD.
    Create {
        name: String,
    },
    /// Delete a branch.
    Delete {
        name: String,

        /// Delete even if not merged.
        #[arg(short, long)]
        force: bool,
    },
    /// Merge a branch into the current one with a merge commit.
    Merge {
        name: String,
    },
}

/// Arguments for `gitsh checkout`.
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Branch name or revision.
    pub name: String,
}

/// Arguments for `gitsh tags`.
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Only list tags matching this glob.
    pub pattern: Option<String>,
}

/// Arguments for `gitsh tag`.
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Tag name.
    pub name: String,

    /// Tag message (default: the tag name).
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for `gitsh add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Paths to stage.
    pub paths: Vec<String>,
}

/// Arguments for `gitsh commit`.
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Commit message.
    #[arg(short, long)]
    pub message: String,

    /// Stage modified tracked files first.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for `gitsh log`.
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Revision to start from (default: HEAD).
    pub revision: Option<String>,

    /// Maximum number of commits.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,
}

/// Arguments for `gitsh files`.
#[derive(Args, Debug)]
pub struct FilesArgs {
    /// Revision whose changes to list.
    #[arg(default_value = "HEAD")]
    pub revision: String,
}

/// Arguments for `gitsh export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Target directory. Replaced if it exists.
    pub dir: PathBuf,

    /// Revision to export.
    #[arg(default_value = "HEAD")]
    pub revision: String,
}

/// Arguments for `gitsh run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// git arguments, each passed as one word.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub args: Vec<String>,
}

/// Arguments for `gitsh completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Shells supported by `gitsh completion`.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate bash completion script.
    Bash,
    /// Generate zsh completion script.
    Zsh,
    /// Generate fish completion script.
    Fish,
    /// Generate PowerShell completion script.
    Powershell,
}
