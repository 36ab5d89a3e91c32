//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing-subscriber`. The level follows the
//! `-v` count unless `RUST_LOG` is set; `log` records from dependencies and the
//! config loader are bridged into the same subscriber.
//!
//! ```ignore
//! use classmap::observability::init_logging;
//!
//! fn main() {
//!     init_logging(1, false); // info
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Map a `-v` count (and `--quiet`) to a default filter directive.
pub fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
