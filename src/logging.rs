//! Tracing setup for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "mfl_api=debug"
    } else {
        "mfl_api=warn"
    }
}

/// Install a stderr subscriber so stdout carries only command output.
///
/// `RUST_LOG` wins over `verbose`. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
