//! Structured logging to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the global subscriber.
///
/// `RUST_LOG` overrides the default filter. `verbose` raises this crate to
/// `debug`, which also shows the captured output of launched commands.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "other_editor=debug,info"
    } else {
        "other_editor=info,warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) is harmless.
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
