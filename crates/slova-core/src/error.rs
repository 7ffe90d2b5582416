use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("File {} not found. Run again and choose 1 to parse the site", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Malformed JSON in {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("All words have already been used")]
    Exhausted,

    #[error("Failed to save used words: {0}")]
    Persist(#[from] StoreError),
}
