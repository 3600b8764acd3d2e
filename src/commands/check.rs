//! Check command implementation
//!
//! Parses the manifest exactly like `run` would and prints the resulting
//! requirement set without installing anything.

use std::path::PathBuf;

use crate::cli::CheckArgs;
use crate::config::{BootConfig, Overrides};
use crate::error::{DepbootError, Result};
use crate::manifest::RequirementSet;

/// Run check command
pub fn run(workspace: Option<PathBuf>, manifest: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let overrides = Overrides {
        manifest,
        ..Overrides::default()
    };
    let config = BootConfig::resolve(workspace, &overrides)?;
    let requirements = load(&config)?;
    print!("{}", render(&requirements, args.json)?);
    Ok(())
}

fn load(config: &BootConfig) -> Result<RequirementSet> {
    let manifest = config.manifest();
    if !manifest.exists()? {
        return Err(DepbootError::ManifestNotFound {
            path: manifest.path().display().to_string(),
        });
    }
    manifest.requirements()
}

fn render(requirements: &RequirementSet, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(requirements.as_slice())?;
        out.push('\n');
        return Ok(out);
    }
    Ok(requirements
        .iter()
        .map(|req| format!("{req}\n"))
        .collect())
}
