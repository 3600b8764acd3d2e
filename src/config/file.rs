//! Workspace configuration file (depboot.yaml) data structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DepbootError, Result};

/// Configuration file name looked up in the workspace directory
pub const CONFIG_FILE: &str = "depboot.yaml";

/// Contents of `depboot.yaml`
///
/// ```yaml
/// manifest: deps/requirements.txt
/// installer:
///   program: uv
///   args: [pip, install]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Manifest path, relative to the workspace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    #[serde(default)]
    pub installer: InstallerSection,
}

/// `installer:` section of `depboot.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Arguments placed before the requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}

impl FileConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load `depboot.yaml` from a workspace, if present
    pub fn load(workspace: &Path) -> Result<Option<Self>> {
        let path = workspace.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| DepbootError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content)
            .map(Some)
            .map_err(|e| match e {
                DepbootError::ConfigParseFailed { reason, .. } => DepbootError::ConfigParseFailed {
                    path: path.display().to_string(),
                    reason,
                },
                other => other,
            })
    }
}
