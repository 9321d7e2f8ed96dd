//! Error types for feature definition and rendering

use thiserror::Error;

/// Errors raised while defining or rendering features
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Invalid feature name: {0:?}")]
    InvalidName(String),

    #[error("Key alias count mismatch: expected {expected}, got {actual}")]
    KeyAliasCountMismatch { expected: usize, actual: usize },

    #[error("Feature type is unspecified and has no config representation")]
    UnspecifiedType,

    #[error("Unknown aggregation: {0}")]
    UnknownAggregation(String),

    #[error("Unknown value type: {0}")]
    UnknownValueType(String),

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for feature operations
pub type Result<T> = std::result::Result<T, FeatureError>;
