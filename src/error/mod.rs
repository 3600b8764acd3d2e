//! Error types and handling for depboot
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors from the bootstrap pipeline never reach the user as a failure:
//! the bootstrapper downgrades them to a single warning line. Only the
//! auxiliary commands (`check`, `completions`) surface them as exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for depboot operations
#[derive(Error, Diagnostic, Debug)]
pub enum DepbootError {
    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(depboot::manifest::not_found),
        help("Create a requirements.txt in the workspace or pass --manifest")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest '{path}': {reason}")]
    #[diagnostic(code(depboot::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Manifest '{path}' is not valid UTF-8")]
    #[diagnostic(
        code(depboot::manifest::not_utf8),
        help("Save the manifest with UTF-8 encoding")
    )]
    ManifestNotUtf8 { path: String },

    // Configuration errors
    #[error("Failed to read configuration file '{path}': {reason}")]
    #[diagnostic(code(depboot::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file '{path}': {reason}")]
    #[diagnostic(
        code(depboot::config::parse_failed),
        help("Check the YAML syntax; allowed keys are 'manifest' and 'installer'")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Installer errors
    #[error("Refusing to invoke the installer with no requirements")]
    #[diagnostic(code(depboot::installer::empty))]
    EmptyRequirementSet,

    #[error("Failed to start installer '{program}': {reason}")]
    #[diagnostic(
        code(depboot::installer::spawn_failed),
        help("Check that the installer is on PATH or set --installer")
    )]
    InstallerSpawnFailed { program: String, reason: String },

    #[error("Installer '{program}' exited with {status}{detail}")]
    #[diagnostic(code(depboot::installer::failed))]
    InstallerFailed {
        program: String,
        status: String,
        detail: String,
    },

    #[error("Bootstrap panicked: {message}")]
    #[diagnostic(code(depboot::bootstrap::panicked))]
    Panicked { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(depboot::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(depboot::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DepbootError {
    fn from(err: std::io::Error) -> Self {
        DepbootError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DepbootError {
    fn from(err: serde_yaml::Error) -> Self {
        DepbootError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DepbootError {
    fn from(err: serde_json::Error) -> Self {
        DepbootError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DepbootError>;
