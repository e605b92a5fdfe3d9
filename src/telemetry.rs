//! Logging setup for the binaries.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber on stderr, filtered by `RUST_LOG` (default
/// `warn`). Stdout is left alone since the streaming stages write data there.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
