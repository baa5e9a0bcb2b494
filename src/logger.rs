use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub const LOG_ENV: &str = "FASTER_REQUESTS_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Logs go to stderr so stdout carries only progress.
pub fn init_logging() {
    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(DEFAULT_FILTER),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
