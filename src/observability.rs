use anyhow::Context;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter directives for the process log, `RUST_LOG` syntax.
pub const LOG_FILTER_ENV: &str = "BURROW_LOG";

const DEFAULT_FILTER: &str = "info";

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Everything goes to stderr; stdout carries
/// only command output and the run result block.
pub fn init_logging() -> anyhow::Result<()> {
    let directives = std::env::var(LOG_FILTER_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}
