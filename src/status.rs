//! Status reporting for the bootstrap pipeline
//!
//! Informational lines go to stdout, the single warning produced on a
//! contained failure goes to stderr.

use std::sync::{Mutex, PoisonError};

use console::Style;

use crate::manifest::RequirementSet;

/// Destination for bootstrap status lines
pub trait StatusSink: Send + Sync {
    /// Informational progress line
    fn info(&self, message: &str);

    /// Non-fatal warning line
    fn warn(&self, message: &str);
}

/// Writes status to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", Style::new().yellow().for_stderr().apply_to(message));
    }
}

/// Channel a captured status line was written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Info,
    Warning,
}

/// Keeps status lines in memory, for hosts that render status themselves
#[derive(Debug, Default)]
pub struct MemoryStatus {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl MemoryStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.on(Channel::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.on(Channel::Warning)
    }

    fn on(&self, channel: Channel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line)
            .collect()
    }

    fn push(&self, channel: Channel, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((channel, message.to_string()));
    }
}

impl StatusSink for MemoryStatus {
    fn info(&self, message: &str) {
        self.push(Channel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Channel::Warning, message);
    }
}

/// Message catalogue
pub mod messages {
    use super::RequirementSet;

    pub fn found(manifest: &str) -> String {
        format!("📦 Found {manifest}, installing packages...")
    }

    pub fn installing(requirements: &RequirementSet) -> String {
        format!("   Installing: {requirements}")
    }

    pub fn installed() -> String {
        "✅ All packages installed successfully!".to_string()
    }

    pub fn no_packages(manifest: &str) -> String {
        format!("   No packages found in {manifest}")
    }

    pub fn no_manifest(manifest: &str) -> String {
        format!("ℹ️  No {manifest} found, skipping package installation")
    }

    pub fn warning(manifest: &str, error: &dyn std::fmt::Display) -> String {
        format!("⚠️  Warning: Could not install packages from {manifest}: {error}")
    }
}
