//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Directives used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "courtside=debug,tower_http=debug"
    } else {
        "courtside=info,tower_http=info"
    }
}

/// Sets up logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise [`default_directives`] applies.
/// Fails if a global subscriber is already installed.
pub fn setup_logging(verbose: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init()
}
