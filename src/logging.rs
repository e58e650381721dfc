//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialise tracing-based logging on stderr.
///
/// Uses `RUST_LOG` if set, otherwise `warn` when quiet, `debug` when
/// verbose and `info` by default. Stdout is left for command output.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
