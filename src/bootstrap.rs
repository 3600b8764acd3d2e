//! Startup dependency bootstrap
//!
//! The pipeline is strictly linear:
//! 1. Locate the manifest (absent: report and stop)
//! 2. Read and parse it into a [`RequirementSet`]
//! 3. Stop if nothing is installable
//! 4. Hand the whole set to the installer in one batch call
//!
//! Every failure along the way, including a panic in any stage, ends up
//! as exactly one warning line. [`Bootstrapper::run`] always returns.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;

use crate::config::BootConfig;
use crate::error::{DepbootError, Result};
use crate::installer::{DryRunInstaller, Installer};
use crate::manifest::{Manifest, RequirementSet};
use crate::progress::InstallSpinner;
use crate::status::{StatusSink, messages};

/// How a bootstrap run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No manifest at the configured path
    NoManifest,
    /// Manifest contained only blanks and comments
    NoPackages,
    /// Installer accepted the batch
    Installed(RequirementSet),
    /// A failure was contained and reported as a warning
    Failed(String),
}

impl BootstrapOutcome {
    /// True unless a failure was contained
    pub fn is_ok(&self) -> bool {
        !matches!(self, BootstrapOutcome::Failed(_))
    }
}

/// Installs the workspace manifest before the session starts
pub struct Bootstrapper {
    manifest: Manifest,
    installer: Arc<dyn Installer>,
    status: Arc<dyn StatusSink>,
    spinner: bool,
}

impl Bootstrapper {
    pub fn new(
        manifest: Manifest,
        installer: Arc<dyn Installer>,
        status: Arc<dyn StatusSink>,
    ) -> Self {
        Self {
            manifest,
            installer,
            status,
            spinner: false,
        }
    }

    /// Build from resolved settings, swapping in the dry-run installer when asked
    pub fn from_config(config: &BootConfig, status: Arc<dyn StatusSink>) -> Self {
        let installer: Arc<dyn Installer> = if config.dry_run {
            Arc::new(DryRunInstaller::new(config.installer.clone(), status.clone()))
        } else {
            Arc::new(config.installer.clone())
        };
        Self::new(config.manifest(), installer, status)
    }

    /// Show a spinner on stderr while the installer runs
    #[must_use]
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }

    /// Run the bootstrap pipeline. Never fails and never panics on behalf
    /// of the installer; failures are reported through the status sink.
    pub async fn run(&self) -> BootstrapOutcome {
        let name = self.manifest.display_name();

        let failure = match AssertUnwindSafe(self.pipeline(&name)).catch_unwind().await {
            Ok(Ok(outcome)) => return outcome,
            Ok(Err(err)) => err,
            Err(panic) => DepbootError::Panicked {
                message: panic_message(panic.as_ref()),
            },
        };

        tracing::debug!(error = %failure, "bootstrap failed, continuing startup");
        self.status.warn(&messages::warning(&name, &failure));
        BootstrapOutcome::Failed(failure.to_string())
    }

    async fn pipeline(&self, name: &str) -> Result<BootstrapOutcome> {
        let path = self.manifest.path().display().to_string();

        if !self.manifest.exists()? {
            tracing::debug!(path = %path, "manifest not found");
            self.status.info(&messages::no_manifest(name));
            return Ok(BootstrapOutcome::NoManifest);
        }
        self.status.info(&messages::found(name));

        let requirements = self.manifest.requirements()?;
        tracing::debug!(path = %path, count = requirements.len(), "parsed manifest");

        if requirements.is_empty() {
            self.status.info(&messages::no_packages(name));
            return Ok(BootstrapOutcome::NoPackages);
        }

        self.status.info(&messages::installing(&requirements));
        let spinner = InstallSpinner::start(self.spinner, requirements.len());
        let installed = self.installer.install(requirements.as_slice()).await;
        spinner.finish();
        installed?;

        tracing::debug!(installer = self.installer.name(), "install finished");
        self.status.info(&messages::installed());
        Ok(BootstrapOutcome::Installed(requirements))
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::installer::testing::{Behavior, RecordingInstaller};
    use crate::manifest::DEFAULT_MANIFEST;
    use crate::status::MemoryStatus;
    use tempfile::TempDir;

    struct Harness {
        temp: TempDir,
        installer: Arc<RecordingInstaller>,
        status: Arc<MemoryStatus>,
    }

    impl Harness {
        fn new(behavior: Behavior) -> Self {
            Self {
                temp: TempDir::new().unwrap(),
                installer: Arc::new(RecordingInstaller::new(behavior)),
                status: Arc::new(MemoryStatus::new()),
            }
        }

        fn write_manifest(&self, content: &str) {
            std::fs::write(self.temp.path().join(DEFAULT_MANIFEST), content).unwrap();
        }

        fn bootstrapper(&self) -> Bootstrapper {
            Bootstrapper::new(
                Manifest::locate(self.temp.path(), Path::new(DEFAULT_MANIFEST)),
                self.installer.clone(),
                self.status.clone(),
            )
        }
    }

    #[tokio::test]
    async fn test_missing_manifest_skips_install() {
        let h = Harness::new(Behavior::Succeed);

        let outcome = h.bootstrapper().run().await;

        assert_eq!(outcome, BootstrapOutcome::NoManifest);
        assert!(h.installer.calls().is_empty());
        assert!(h.status.warnings().is_empty());
        assert_eq!(
            h.status.infos(),
            vec!["ℹ️  No requirements.txt found, skipping package installation"]
        );
    }

    #[tokio::test]
    async fn test_comment_only_manifest_skips_install() {
        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("# nothing here\n\n");

        let outcome = h.bootstrapper().run().await;

        assert_eq!(outcome, BootstrapOutcome::NoPackages);
        assert!(h.installer.calls().is_empty());
        assert!(h.status.warnings().is_empty());
        assert_eq!(
            h.status.infos().last().map(String::as_str),
            Some("   No packages found in requirements.txt")
        );
    }

    #[tokio::test]
    async fn test_empty_manifest_skips_install() {
        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("");

        assert_eq!(h.bootstrapper().run().await, BootstrapOutcome::NoPackages);
        assert!(h.installer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_installs_declarations_in_one_batch() {
        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("numpy\n# comment\n\npandas==2.0\n");

        let outcome = h.bootstrapper().run().await;

        assert!(outcome.is_ok());
        assert_eq!(h.installer.calls(), vec![vec!["numpy", "pandas==2.0"]]);
        assert!(h.status.warnings().is_empty());
        assert_eq!(
            h.status.infos(),
            vec![
                "📦 Found requirements.txt, installing packages...",
                "   Installing: numpy, pandas==2.0",
                "✅ All packages installed successfully!",
            ]
        );
    }

    #[tokio::test]
    async fn test_trims_and_keeps_order_with_interleaving() {
        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("\n  # header\n  scipy  \n\n\tnumpy>=1.24\n# mid\nscipy\n   \nrequests[socks]");

        h.bootstrapper().run().await;

        assert_eq!(
            h.installer.calls(),
            vec![vec!["scipy", "numpy>=1.24", "scipy", "requests[socks]"]]
        );
    }

    #[tokio::test]
    async fn test_installer_failure_is_one_warning() {
        let h = Harness::new(Behavior::Fail);
        h.write_manifest("numpy\nscipy\n");

        let outcome = h.bootstrapper().run().await;

        assert!(matches!(outcome, BootstrapOutcome::Failed(_)));
        assert_eq!(h.installer.calls().len(), 1);
        let warnings = h.status.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with(
            "⚠️  Warning: Could not install packages from requirements.txt:"
        ));
        assert!(warnings[0].contains("no matching distribution"));
        assert!(
            !h.status
                .infos()
                .iter()
                .any(|line| line.contains("installed successfully"))
        );
    }

    #[tokio::test]
    async fn test_installer_panic_is_contained() {
        let h = Harness::new(Behavior::Panic);
        h.write_manifest("numpy\n");

        let outcome = h.bootstrapper().run().await;

        match outcome {
            BootstrapOutcome::Failed(message) => {
                assert!(message.starts_with("Bootstrap panicked"));
                assert!(message.contains("installer exploded"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(h.installer.calls().len(), 1);
        assert_eq!(h.status.warnings().len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_manifest_is_one_warning() {
        let h = Harness::new(Behavior::Succeed);
        std::fs::create_dir(h.temp.path().join(DEFAULT_MANIFEST)).unwrap();

        let outcome = h.bootstrapper().run().await;

        assert!(matches!(outcome, BootstrapOutcome::Failed(_)));
        assert!(h.installer.calls().is_empty());
        assert_eq!(h.status.warnings().len(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unsearchable_workspace_is_one_warning() {
        use std::os::unix::fs::PermissionsExt;

        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("numpy\n");
        let manifest = h.temp.path().join(DEFAULT_MANIFEST);
        std::fs::set_permissions(h.temp.path(), std::fs::Permissions::from_mode(0o000)).unwrap();
        let denied = std::fs::metadata(&manifest).is_err();

        let outcome = h.bootstrapper().run().await;
        std::fs::set_permissions(h.temp.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

        // Privileged users bypass directory permissions
        if !denied {
            return;
        }
        assert!(matches!(outcome, BootstrapOutcome::Failed(_)));
        assert!(h.installer.calls().is_empty());
        assert!(h.status.infos().is_empty());
        assert_eq!(h.status.warnings().len(), 1);
        assert!(h.status.warnings()[0].contains("requirements.txt"));
    }

    #[tokio::test]
    async fn test_undecodable_manifest_is_one_warning() {
        let h = Harness::new(Behavior::Succeed);
        std::fs::write(h.temp.path().join(DEFAULT_MANIFEST), [b'a', 0xc3, 0x28, b'\n']).unwrap();

        let outcome = h.bootstrapper().run().await;

        assert!(matches!(outcome, BootstrapOutcome::Failed(_)));
        assert!(h.installer.calls().is_empty());
        assert!(h.status.warnings()[0].contains("not valid UTF-8"));
    }

    #[tokio::test]
    async fn test_rerun_issues_identical_batches() {
        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("numpy\npandas==2.0\n");
        let bootstrapper = h.bootstrapper();

        let first = bootstrapper.run().await;
        let second = bootstrapper.run().await;

        assert_eq!(first, second);
        let calls = h.installer.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn test_rerun_picks_up_manifest_edits() {
        let h = Harness::new(Behavior::Succeed);
        let bootstrapper = h.bootstrapper();

        assert_eq!(bootstrapper.run().await, BootstrapOutcome::NoManifest);
        h.write_manifest("numpy\n");
        assert!(bootstrapper.run().await.is_ok());

        assert_eq!(h.installer.calls(), vec![vec!["numpy"]]);
    }

    #[tokio::test]
    async fn test_dry_run_from_config_does_not_spawn() {
        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("numpy\n");
        let mut config = BootConfig::new(h.temp.path());
        config.dry_run = true;
        config.installer =
            crate::installer::CommandInstaller::new("depboot-no-such-installer", Vec::new());

        let outcome = Bootstrapper::from_config(&config, h.status.clone())
            .run()
            .await;

        assert!(outcome.is_ok());
        assert!(h.status.warnings().is_empty());
        assert!(
            h.status
                .infos()
                .contains(&"   [dry run] would run: depboot-no-such-installer numpy".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_installer_program_is_one_warning() {
        let h = Harness::new(Behavior::Succeed);
        h.write_manifest("numpy\n");
        let mut config = BootConfig::new(h.temp.path());
        config.installer =
            crate::installer::CommandInstaller::new("depboot-no-such-installer", Vec::new());

        let outcome = Bootstrapper::from_config(&config, h.status.clone())
            .run()
            .await;

        assert!(matches!(outcome, BootstrapOutcome::Failed(_)));
        assert_eq!(h.status.warnings().len(), 1);
        assert!(h.status.warnings()[0].contains("Failed to start installer"));
    }

    #[test]
    fn test_panic_message_variants() {
        let boxed: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(boxed.as_ref()), "static");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");
        let boxed: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }
}
