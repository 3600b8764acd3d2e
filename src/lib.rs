//! depboot - startup dependency bootstrapper
//!
//! Looks for `requirements.txt` when a session starts, parses it, and
//! installs every declared package in a single installer call. Failures
//! never abort the session: they are reported as one warning line.
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use depboot::bootstrap::Bootstrapper;
//! use depboot::installer::CommandInstaller;
//! use depboot::manifest::{DEFAULT_MANIFEST, Manifest};
//! use depboot::status::ConsoleStatus;
//!
//! # async fn session_start() {
//! let bootstrapper = Bootstrapper::new(
//!     Manifest::locate(Path::new("."), Path::new(DEFAULT_MANIFEST)),
//!     Arc::new(CommandInstaller::default()),
//!     Arc::new(ConsoleStatus),
//! );
//! bootstrapper.run().await;
//! # }
//! ```

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod manifest;
pub mod progress;
pub mod status;

pub use bootstrap::{BootstrapOutcome, Bootstrapper};
pub use error::{DepbootError, Result};
pub use manifest::{Manifest, RequirementSet};
