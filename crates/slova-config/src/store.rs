use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_words_file() -> String {
    "words.json".to_string()
}

fn default_used_words_file() -> String {
    "used_words.json".to_string()
}

/// Where the word dictionary and the used-word marks live
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory both files are resolved against
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_words_file")]
    pub words_file: String,
    #[serde(default = "default_used_words_file")]
    pub used_words_file: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            root: default_root(),
            words_file: default_words_file(),
            used_words_file: default_used_words_file(),
        }
    }

    /// Same file names, resolved against another directory
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::new()
        }
    }

    pub fn words_path(&self) -> PathBuf {
        self.root.join(&self.words_file)
    }

    pub fn used_words_path(&self) -> PathBuf {
        self.root.join(&self.used_words_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
