use thiserror::Error;
use waste_analysis::WasteAnalysisError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Analysis error: {0}")]
    AnalysisError(#[from] WasteAnalysisError),

    #[error("Snapshot file error: {0}")]
    SnapshotError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// Manual From implementations for errors that don't have automatic derives
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::SnapshotError(err.to_string())
    }
}
