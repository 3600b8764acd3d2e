use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print requirements one per line:\n    depboot check\n\n\
                  Print requirements as JSON:\n    depboot check --json")]
pub struct CheckArgs {
    /// Print the requirements as a JSON array
    #[arg(long)]
    pub json: bool,
}
