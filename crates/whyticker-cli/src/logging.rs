use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Console logging on stderr so it never interleaves with the widget on stdout.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|error| CliError::Logging(format!("invalid filter '{}': {error}", config.log_level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .with_target(true),
        )
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))?;

    tracing::debug!(level = %config.log_level, "logging initialized");
    Ok(())
}
