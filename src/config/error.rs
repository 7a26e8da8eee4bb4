//! Configuration error types

use crate::optim::SchedulerError;

/// Errors raised while loading or building a scheduler configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid scheduler config: {0}")]
    Scheduler(#[from] SchedulerError),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
