// src/logging.rs
//! Diagnostic logging setup for the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "wordgraph_core=debug,wordgraph=debug"
    } else {
        "wordgraph_core=warn,wordgraph=warn"
    }
}

/// Installs a stderr subscriber. `RUST_LOG` overrides the verbosity flag.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
