//! tracing subscriber setup
//!
//! Diagnostics go to stderr so stdout carries only the report summary and
//! the deletion commands.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "branchsweep=debug,branchsweep_core=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber; `RUST_LOG` takes precedence
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
