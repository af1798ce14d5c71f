// src/logging.rs
// =============================================================================
// Diagnostic logging setup shared by both binaries.
//
// Reports go to stdout with println!; tracing output always goes to stderr so
// it never mixes with a --json report. RUST_LOG wins when it is set,
// otherwise --verbose selects debug and the default is warn.
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: a second call (e.g. from tests) is not an error worth dying for
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
