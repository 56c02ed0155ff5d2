//! Logger bootstrap

use env_logger::Env;

/// Install the stderr logger; `RUST_LOG` overrides the default `warn` level.
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
