use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tradeoff operations
pub type Result<T> = std::result::Result<T, TradeoffError>;

/// Error types for dataset loading, validation and report output
#[derive(Debug, Error)]
pub enum TradeoffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset parse error: {0}")]
    DatasetParse(#[from] toml::de::Error),

    #[error("Dataset file not found: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Unknown topic '{key}'. Available topics: {available}")]
    UnknownTopic { key: String, available: String },

    #[error("Invalid dataset: {message}")]
    InvalidDataset { message: String },

    #[error("Report output failed: {message}")]
    ReportFailed { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl TradeoffError {
    /// Create a new invalid dataset error
    pub fn invalid_dataset<S: Into<String>>(message: S) -> Self {
        Self::InvalidDataset {
            message: message.into(),
        }
    }

    /// Create a new unknown topic error listing the valid keys
    pub fn unknown_topic<S: Into<String>>(key: S, available: &[&str]) -> Self {
        Self::UnknownTopic {
            key: key.into(),
            available: if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            },
        }
    }

    /// Create a new report output error
    pub fn report_failed<S: Into<String>>(message: S) -> Self {
        Self::ReportFailed {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}
