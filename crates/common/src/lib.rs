//! Shared setup for binaries embedding the age verification client.

mod environment;

pub use environment::{EnvError, VerifierEnv};

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
