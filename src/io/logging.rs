//! Log output setup for the command-line tool
//!
//! The library only emits `tracing` events. Installing a subscriber is left
//! to the binary.

use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Pick the log filter: `--verbose` wins, then `RUST_LOG`, then the default
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a stderr subscriber for the process
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
