//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence
//! over the configured level.

use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::LoggingConfig;

/// Install the global subscriber writing to stdout; later calls are no-ops
pub fn init_logging(config: &LoggingConfig) {
    init_with_writer(config, std::io::stdout);
}

/// Install the global subscriber writing to stderr, keeping stdout free
/// for command output
pub fn init_stderr_logging(config: &LoggingConfig) {
    init_with_writer(config, std::io::stderr);
}

fn init_with_writer<W>(config: &LoggingConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "popdash={level},tower_http={level}",
            level = config.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
