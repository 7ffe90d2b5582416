use slova_core::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Failed to load page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    #[error("Failed to save words: {0}")]
    Store(#[from] StoreError),
}
