use thiserror::Error;

#[derive(Error, Debug)]
pub enum WasteAnalysisError {
    #[error("Failed to read inventory snapshot: {0}")]
    Snapshot(#[from] anyhow::Error),
}
