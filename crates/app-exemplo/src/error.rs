//! Startup error types.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while resolving the configuration snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
