//! Logging setup.
//!
//! Diagnostics go through `tracing` to stderr; the user-facing compile
//! report stays on stdout. `RUST_LOG` takes precedence over the
//! `--verbose` flag.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_filter = if verbose { "agentc=debug" } else { "agentc=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
