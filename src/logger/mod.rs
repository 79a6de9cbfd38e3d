pub mod animated_logger;

use log::LevelFilter;

/// Initialises `env_logger`. `RUST_LOG` still takes precedence over the
/// default level.
pub fn init(verbose: bool) {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
