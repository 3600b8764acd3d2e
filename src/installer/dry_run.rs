//! Dry-run installer: reports the batch instead of running it

use std::sync::Arc;

use super::{CommandInstaller, InstallFut, Installer};
use crate::status::StatusSink;

pub struct DryRunInstaller {
    inner: CommandInstaller,
    status: Arc<dyn StatusSink>,
}

impl DryRunInstaller {
    pub fn new(inner: CommandInstaller, status: Arc<dyn StatusSink>) -> Self {
        Self { inner, status }
    }
}

impl Installer for DryRunInstaller {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn install<'a>(&'a self, requirements: &'a [String]) -> InstallFut<'a> {
        Box::pin(async move {
            self.status.info(&format!(
                "   [dry run] would run: {}",
                self.inner.command_line(requirements)
            ));
            Ok(())
        })
    }
}
