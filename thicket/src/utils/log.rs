use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Checked before `RUST_LOG`.
const LOG_ENV: &str = "THICKET_LOG";

/// Installs the global subscriber.
///
/// # Errors
///
/// Errors if a global subscriber was already installed.
pub fn setup_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_default();
    tracing::subscriber::set_global_default(get_subscriber(parse_filter(&directives)))
}

/// Builds the filter for `directives`, keeping only the valid ones. Defaults to `info`.
#[must_use]
pub fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn get_subscriber(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

