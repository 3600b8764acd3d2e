//! Installer backed by an external program (pip, uv, ...)

use std::process::Stdio;

use tokio::io::AsyncReadExt;
use tokio::process::Command;

use super::{InstallFut, Installer};
use crate::error::{DepbootError, Result};

/// Default installer program
pub const DEFAULT_PROGRAM: &str = "python3";

/// Default arguments placed before the requirements
pub const DEFAULT_ARGS: &[&str] = &["-m", "pip", "install"];

/// Lines of installer stderr kept in the failure description
const STDERR_TAIL_LINES: usize = 3;

/// Runs `<program> <args...> <requirements...>` once per batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_ARGS.iter().map(|a| (*a).to_string()).collect(),
        )
    }
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full command line for a batch, for display
    pub fn command_line(&self, requirements: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(requirements.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn run(&self, requirements: &[String]) -> Result<()> {
        if requirements.is_empty() {
            return Err(DepbootError::EmptyRequirementSet);
        }

        tracing::debug!(
            program = %self.program,
            count = requirements.len(),
            "spawning installer"
        );

        // stdout stays attached so installer progress reaches the user
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(requirements)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DepbootError::InstallerSpawnFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        let mut stderr = Vec::new();
        if let Some(mut pipe) = child.stderr.take() {
            pipe.read_to_end(&mut stderr).await?;
        }
        let status = child.wait().await?;
        let stderr = String::from_utf8_lossy(&stderr);

        if status.success() {
            tracing::debug!(program = %self.program, stderr = %stderr.trim(), "installer finished");
            return Ok(());
        }

        Err(DepbootError::InstallerFailed {
            program: self.program.clone(),
            status: status.to_string(),
            detail: stderr_tail(&stderr),
        })
    }
}

impl Installer for CommandInstaller {
    fn name(&self) -> &str {
        &self.program
    }

    fn install<'a>(&'a self, requirements: &'a [String]) -> InstallFut<'a> {
        Box::pin(self.run(requirements))
    }
}

/// Last few non-empty stderr lines, formatted as an error suffix
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return String::new();
    }
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    format!(": {}", lines[start..].join("; "))
}
