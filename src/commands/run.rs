//! Run command implementation
//!
//! Resolves settings, then hands over to the [`Bootstrapper`]. This command
//! succeeds even when installation fails: a session waiting on it must
//! always be able to start.

use std::path::PathBuf;
use std::sync::Arc;

use console::Term;

use crate::bootstrap::{BootstrapOutcome, Bootstrapper};
use crate::cli::RunArgs;
use crate::config::{BootConfig, Overrides};
use crate::error::Result;
use crate::status::{ConsoleStatus, StatusSink, messages};

/// Run the bootstrap with console status
pub async fn run(
    workspace: Option<PathBuf>,
    manifest: Option<PathBuf>,
    args: RunArgs,
) -> Result<()> {
    let status: Arc<dyn StatusSink> = Arc::new(ConsoleStatus);
    let outcome = bootstrap(workspace, manifest, args, status).await;
    tracing::debug!(?outcome, "bootstrap complete");
    Ok(())
}

/// Resolve configuration and run the bootstrap, reporting to `status`
pub async fn bootstrap(
    workspace: Option<PathBuf>,
    manifest: Option<PathBuf>,
    args: RunArgs,
    status: Arc<dyn StatusSink>,
) -> BootstrapOutcome {
    let overrides = Overrides {
        manifest,
        installer: args.installer,
        installer_args: args.installer_args,
        dry_run: args.dry_run,
    };

    let config = match BootConfig::resolve(workspace, &overrides) {
        Ok(config) => config,
        Err(err) => {
            let name = BootConfig::manifest_name_hint(&overrides);
            status.warn(&messages::warning(&name, &err));
            return BootstrapOutcome::Failed(err.to_string());
        }
    };
    tracing::debug!(
        workspace = %config.workspace.display(),
        manifest = %config.manifest.display(),
        installer = config.installer.program(),
        dry_run = config.dry_run,
        "resolved configuration"
    );

    let spinner = !args.no_progress && !config.dry_run && Term::stderr().is_term();
    Bootstrapper::from_config(&config, status)
        .with_spinner(spinner)
        .run()
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;
    use crate::status::MemoryStatus;
    use serial_test::serial;
    use tempfile::TempDir;

    fn dry_run() -> RunArgs {
        RunArgs {
            dry_run: true,
            ..RunArgs::default()
        }
    }

    #[tokio::test]
    async fn test_run_without_manifest_succeeds() {
        let temp = TempDir::new().unwrap();
        let result = run(Some(temp.path().to_path_buf()), None, RunArgs::default()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_config_is_contained() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "bogus_key: 1\n").unwrap();
        std::fs::write(temp.path().join("requirements.txt"), "numpy\n").unwrap();
        let status = Arc::new(MemoryStatus::new());

        let outcome = bootstrap(
            Some(temp.path().to_path_buf()),
            None,
            dry_run(),
            status.clone(),
        )
        .await;

        assert!(matches!(outcome, BootstrapOutcome::Failed(_)));
        assert_eq!(status.warnings().len(), 1);
        assert!(status.warnings()[0].contains("requirements.txt"));
        assert!(status.infos().is_empty());
    }

    #[tokio::test]
    async fn test_manifest_override_is_used() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("dev.txt"), "pytest\n").unwrap();
        let status = Arc::new(MemoryStatus::new());

        let outcome = bootstrap(
            Some(temp.path().to_path_buf()),
            Some(PathBuf::from("dev.txt")),
            dry_run(),
            status.clone(),
        )
        .await;

        assert_eq!(
            outcome,
            BootstrapOutcome::Installed(crate::manifest::RequirementSet::parse("pytest"))
        );
        assert_eq!(
            status.infos()[0],
            "📦 Found dev.txt, installing packages..."
        );
    }

    /// Restores the process working directory on drop, even after a panic
    struct CwdGuard(PathBuf);

    impl CwdGuard {
        fn enter(dir: &std::path::Path) -> Self {
            let previous = std::env::current_dir().unwrap();
            std::env::set_current_dir(dir).unwrap();
            Self(previous)
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.0);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_defaults_to_working_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("requirements.txt"), "numpy\n# x\nscipy\n").unwrap();
        let status = Arc::new(MemoryStatus::new());

        let outcome = {
            let _cwd = CwdGuard::enter(temp.path());
            bootstrap(None, None, dry_run(), status.clone()).await
        };

        assert_eq!(
            outcome,
            BootstrapOutcome::Installed(crate::manifest::RequirementSet::parse("numpy\nscipy"))
        );
        assert!(
            status
                .infos()
                .iter()
                .any(|line| line.ends_with("python3 -m pip install numpy scipy"))
        );
    }
}
