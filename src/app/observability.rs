//! Tracing initialization for the CLI.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g. `envstage=debug`.
pub const LOG_ENV: &str = "ENVSTAGE_LOG";

/// Initialize tracing to stderr. Call once at process startup.
///
/// `ENVSTAGE_LOG` wins when set; otherwise `--verbose` selects debug output for
/// this crate and the default is warnings only.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "envstage=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
