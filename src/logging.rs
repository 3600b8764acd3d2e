//! Diagnostic logging setup
//!
//! stderr is the warning channel, so nothing is logged by default.
//! `--verbose` enables debug events; `DEPBOOT_LOG` takes a full
//! `EnvFilter` directive and wins over both.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "DEPBOOT_LOG";

/// Filter used when `DEPBOOT_LOG` is unset or invalid
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "depboot=debug" } else { "off" }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let ansi = console::Term::stderr().is_term();
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .with(env_filter(verbose))
        .try_init();
}
