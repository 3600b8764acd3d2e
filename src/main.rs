//! depboot - startup dependency bootstrapper
//!
//! Installs the packages declared in requirements.txt before an interactive
//! session starts, without ever failing the startup sequence.

use clap::Parser;

use depboot::cli::{Cli, Commands};
use depboot::{commands, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let workspace = cli.workspace.clone();
    let manifest = cli.manifest.clone();
    let result = match cli.into_command() {
        Commands::Run(args) => commands::run::run(workspace, manifest, args).await,
        Commands::Check(args) => commands::check::run(workspace, manifest, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
