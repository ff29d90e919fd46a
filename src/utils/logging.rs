use tracing_subscriber::EnvFilter;

use crate::models::Config;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects the `debug` level
/// and the default is `info`.
pub fn init_logging(config: &Config) {
    let default_level = if config.debug_mode { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
