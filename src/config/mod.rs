//! Configuration for a bootstrap run
//!
//! Settings are layered, later layers winning:
//! built-in defaults, `depboot.yaml` in the workspace, then
//! environment variables and command-line flags (both handled by clap).

pub mod file;

use std::path::{Path, PathBuf};

pub use file::{CONFIG_FILE, FileConfig, InstallerSection};

use crate::error::Result;
use crate::installer::CommandInstaller;
use crate::installer::command::{DEFAULT_ARGS, DEFAULT_PROGRAM};
use crate::manifest::{DEFAULT_MANIFEST, Manifest};

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub manifest: Option<PathBuf>,
    pub installer: Option<String>,
    /// Replaces the configured installer arguments when non-empty
    pub installer_args: Vec<String>,
    pub dry_run: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    pub workspace: PathBuf,
    pub manifest: PathBuf,
    pub installer: CommandInstaller,
    pub dry_run: bool,
}

impl BootConfig {
    /// Defaults for a workspace: `requirements.txt` installed with pip
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            installer: CommandInstaller::default(),
            dry_run: false,
        }
    }

    /// Resolve settings for a workspace, reading `depboot.yaml` if present
    pub fn resolve(workspace: Option<PathBuf>, overrides: &Overrides) -> Result<Self> {
        // "." keeps manifest lookup relative to the process working directory
        let workspace = workspace.unwrap_or_else(|| PathBuf::from("."));
        let file = FileConfig::load(&workspace)?.unwrap_or_default();
        Ok(Self::new(workspace).with_file(file).with_overrides(overrides))
    }

    /// Apply values from `depboot.yaml`
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(manifest) = file.manifest {
            self.manifest = manifest;
        }
        let program = file
            .installer
            .program
            .unwrap_or_else(|| self.installer.program().to_string());
        let args = match file.installer.args {
            Some(args) => args,
            // A custom program does not inherit pip's module arguments
            None if program != DEFAULT_PROGRAM => Vec::new(),
            None => DEFAULT_ARGS.iter().map(|a| (*a).to_string()).collect(),
        };
        self.installer = CommandInstaller::new(program, args);
        self
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(manifest) = &overrides.manifest {
            self.manifest.clone_from(manifest);
        }
        if overrides.installer.is_some() || !overrides.installer_args.is_empty() {
            let program = overrides
                .installer
                .clone()
                .unwrap_or_else(|| self.installer.program().to_string());
            let args = if overrides.installer_args.is_empty() {
                if overrides.installer.is_some() {
                    Vec::new()
                } else {
                    self.installer.args().to_vec()
                }
            } else {
                overrides.installer_args.clone()
            };
            self.installer = CommandInstaller::new(program, args);
        }
        self.dry_run |= overrides.dry_run;
        self
    }

    pub fn manifest(&self) -> Manifest {
        Manifest::locate(&self.workspace, &self.manifest)
    }

    /// Manifest file name for messages emitted before a config is resolved
    pub fn manifest_name_hint(overrides: &Overrides) -> String {
        overrides
            .manifest
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(
                || DEFAULT_MANIFEST.to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }
}
