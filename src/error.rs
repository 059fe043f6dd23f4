//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite ratio, got {value}")]
    InvalidRatio { field: &'static str, value: f64 },

    #[error("{scope} ratio band is inverted: min {min} > max {max}")]
    InvertedRatioBand {
        scope: &'static str,
        min: f64,
        max: f64,
    },

    #[error("big_percentage must be strictly between 0 and 1, got {0}")]
    BigPercentageOutOfRange(f64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
