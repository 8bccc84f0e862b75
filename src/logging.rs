//! Structured logging setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Honors `RUST_LOG` when set. Otherwise logs `gravity` at info (debug when
/// `verbose`) and everything else at warn. Output goes to stderr so command
/// output on stdout stays clean.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "gravity=debug,warn"
    } else {
        "gravity=info,warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}

/// Initialize logging for tests
///
/// Uses `try_init` so repeated calls across tests are harmless.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}
