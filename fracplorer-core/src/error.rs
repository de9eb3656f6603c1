//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_iterations must be positive, got {0}")]
    NonPositiveIterations(i32),

    #[error("bailout must be a finite value greater than 1, got {0}")]
    BailoutTooSmall(f64),

    #[error("periodicity threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("Failed to parse kernel config: {0}")]
    Parse(#[from] serde_json::Error),
}
