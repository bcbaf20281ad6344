use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Failed to decode trade snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Unsupported snapshot layout: expected an array or an id-keyed object, found {0}")]
    SnapshotLayout(String),
}
