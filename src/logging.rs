use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global `tracing` subscriber before dioxus launches.
///
/// `RUST_LOG` overrides the default `info` filter. Installing twice is a
/// no-op so the dioxus launcher keeps working with our subscriber in place.
pub fn setup_logging() {
    let layer = fmt::layer().with_target(false).with_thread_ids(false);

    if tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
