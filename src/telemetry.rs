//! Log output for the `gamma-exposure` binary.
//!
//! Pipeline stages and API requests emit `tracing` events. They are written
//! to stderr so `analyze --format json` without `-o` and `schema` keep stdout clean.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` when set and parseable, otherwise [`DEFAULT_FILTER`].
fn filter_from(var: Option<&str>) -> EnvFilter {
    var.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the process-wide subscriber. Fails if one is already set.
pub fn init() -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}
