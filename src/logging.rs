use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Logs go to stderr so stdout stays clean for JSON output.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
