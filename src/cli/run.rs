use clap::Parser;

/// Examples shown by `depboot run --help`
pub const RUN_EXAMPLES: &str = "EXAMPLES:\n  \
                   Install requirements.txt with pip:\n    depboot run\n\n\
                   Use uv instead of pip:\n    depboot run --installer uv --installer-arg pip --installer-arg install\n\n\
                   Show what would be installed:\n    depboot run --dry-run";

// Arguments for the run command, also accepted without a subcommand.
// Not a doc comment: flattened into `Cli`, it would replace the about text.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Installer program (defaults to python3 with `-m pip install`)
    #[arg(long, value_name = "PROGRAM", env = "DEPBOOT_INSTALLER")]
    pub installer: Option<String>,

    /// Argument passed to the installer before the requirements (repeatable)
    #[arg(long = "installer-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub installer_args: Vec<String>,

    /// Show what would be installed without running the installer
    #[arg(long)]
    pub dry_run: bool,

    /// Do not show a spinner while installing
    #[arg(long)]
    pub no_progress: bool,
}
