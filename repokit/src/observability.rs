//! Observability (logging)
//!
//! Diagnostics go through `tracing` and are written to stderr, so the status
//! lines a command prints on stdout stay clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence; otherwise the level follows the number of
/// `-v` flags given on the command line. Calling this twice is harmless: the
/// second call leaves the first subscriber in place.
///
/// # Example
///
/// ```rust
/// repokit::observability::init(1);
/// tracing::info!("generator started");
/// ```
pub fn init(verbosity: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if result.is_err() {
        tracing::trace!("tracing subscriber already installed");
    }
}
