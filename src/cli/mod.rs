//! CLI definitions using clap derive API
//!
//! Argument types live in one submodule per command:
//! - run: Bootstrap (install the manifest)
//! - check: Parse and print the manifest
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod run;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use run::{RUN_EXAMPLES, RunArgs};

/// depboot - startup dependency bootstrapper
///
/// Installs the packages listed in requirements.txt before a session starts.
#[derive(Parser, Debug)]
#[command(
    name = "depboot",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    args_conflicts_with_subcommands = true,
    about = "Install requirements.txt before an interactive session starts",
    long_about = "depboot looks for requirements.txt in the workspace, installs every declared \
                  package in a single installer call, and never fails session startup: \
                  problems are reported as a warning and the exit code stays 0.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  depboot                               \x1b[90m# Install requirements.txt from the current directory\x1b[0m\n   \
                  depboot run --installer uv --installer-arg pip --installer-arg install\n   \
                  depboot run --dry-run                 \x1b[90m# Show the installer command only\x1b[0m\n   \
                  depboot check --json                  \x1b[90m# Print parsed requirements\x1b[0m\n"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DEPBOOT_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Manifest path, relative to the workspace (defaults to requirements.txt)
    #[arg(long, short = 'm', global = true, env = "DEPBOOT_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Run options used when no subcommand is given
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to execute; `run` when none was given
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run(self.run))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the manifest's packages (default)
    #[command(after_help = RUN_EXAMPLES)]
    Run(RunArgs),

    /// Parse the manifest and print its requirements
    Check(CheckArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
