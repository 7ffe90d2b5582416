use serde::{Deserialize, Serialize};

use self::source::SourceConfig;
use self::store::StoreConfig;

pub mod source;
pub mod store;

/// Number of words shown per run
pub const DEFAULT_BATCH_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub source: SourceConfig,

    /// How many unused words to pick per run
    pub batch_size: usize,
}

impl Config {
    pub fn new() -> Self {
        Config {
            store: StoreConfig::new(),
            source: SourceConfig::new(),

            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.store.words_path().to_str(), Some("./words.json"));
        assert_eq!(
            config.store.used_words_path().to_str(),
            Some("./used_words.json")
        );
        assert!(config.source.url.starts_with("https://skyeng.ru/"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let store: StoreConfig = serde_json::from_str(r#"{"root": "/tmp/slova"}"#).unwrap();
        assert_eq!(store.words_file, "words.json");
        assert_eq!(store.words_path().to_str(), Some("/tmp/slova/words.json"));
    }
}
