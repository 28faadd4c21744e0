// Logging setup
//
// Diagnostics go to stderr so stdout only carries the prompt and the
// run summary. RUST_LOG wins over the verbosity flag when set.

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
