//! Logging setup

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "booking_server=info,tower_http=info";

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logger(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
