//! Spinner shown while the installer runs

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Spinner on stderr for the duration of the install call.
/// Draws nothing when stderr is not a terminal. Cleared on drop.
pub struct InstallSpinner {
    pb: Option<ProgressBar>,
}

impl InstallSpinner {
    /// Start a spinner, or a no-op when `enabled` is false
    pub fn start(enabled: bool, count: usize) -> Self {
        if !enabled {
            return Self { pb: None };
        }

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner} {msg} ({elapsed})")
            .map(|s| s.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]))
        {
            pb.set_style(style);
        }
        let noun = if count == 1 { "package" } else { "packages" };
        pb.set_message(format!("Installing {count} {noun}..."));
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb: Some(pb) }
    }

    /// Remove the spinner line
    pub fn finish(self) {
        drop(self);
    }
}

impl Drop for InstallSpinner {
    fn drop(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}
