//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the embedding program. [`init_logging`] is a convenience for programs,
//! tests and benchmarks that want the crate's default output.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{TrieError, TrieResult};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Installs a global `tracing` subscriber configured by `config`.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Only the first
/// successful call installs a subscriber; later calls are no-ops.
///
/// # Errors
///
/// Returns [`TrieError::Logging`] if another subscriber was already installed
/// outside this function.
pub fn init_logging(config: &LogConfig) -> TrieResult<()> {
    LOGGING.get_or_try_init(|| install(config)).map(|_| ())
}

fn install(config: &LogConfig) -> TrieResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| TrieError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let config = LogConfig {
            level: "debug".to_string(),
            ..LogConfig::default()
        };

        // The test harness may share the process with another subscriber
        let first = init_logging(&config);
        if first.is_ok() {
            assert!(init_logging(&config).is_ok());
        }
    }
}
