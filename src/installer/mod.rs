//! Package installer capability
//!
//! The bootstrapper never installs anything itself. It hands the whole
//! requirement set to an [`Installer`] in a single batch call and waits for
//! it to finish. Version resolution, retries and namespace mutation belong
//! to the installer.

use std::future::Future;
use std::pin::Pin;

use crate::error::Result;

pub mod command;
pub mod dry_run;

pub use command::CommandInstaller;
pub use dry_run::DryRunInstaller;

/// Future returned by [`Installer::install`]
pub type InstallFut<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// External installation capability
pub trait Installer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Install all requirements as one batch.
    ///
    /// Resolves once the installer has finished. Callers never pass an
    /// empty slice.
    fn install<'a>(&'a self, requirements: &'a [String]) -> InstallFut<'a>;
}
