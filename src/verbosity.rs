// Verbosity levels mapped onto the tracing filter
use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level (0=quiet, 1=basic, 2=full)
pub fn filter_for_level(level: u8) -> &'static str {
    match level {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the level.
pub fn init_logging(level: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_level(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
