use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use slova_config::store::StoreConfig;
use slova_types::{Dictionary, UsedSet};
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// JSON files holding the scraped dictionary and the used-word marks.
/// Every load reads a whole file and every save replaces it.
#[derive(Debug, Clone)]
pub struct WordStore {
    config: StoreConfig,
}

impl WordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn words_path(&self) -> PathBuf {
        self.config.words_path()
    }

    pub fn used_words_path(&self) -> PathBuf {
        self.config.used_words_path()
    }

    /// Load the dictionary; a missing file means the site was never parsed
    pub fn load_dictionary(&self) -> Result<Dictionary, StoreError> {
        let path = self.words_path();
        let dictionary = read_json::<Dictionary>(&path)?.ok_or(StoreError::NotFound(path))?;
        tracing::info!("Loaded {} words", dictionary.len());
        Ok(dictionary)
    }

    /// Load the used-word marks; a missing file is an empty set
    pub fn load_used_set(&self) -> Result<UsedSet, StoreError> {
        let path = self.used_words_path();
        match read_json::<UsedSet>(&path)? {
            Some(used) => {
                tracing::info!("Loaded {} used words", used.count_used());
                Ok(used)
            }
            None => {
                tracing::debug!("{} not found, starting with no used words", path.display());
                Ok(UsedSet::new())
            }
        }
    }

    pub fn save_dictionary(&self, dictionary: &Dictionary) -> Result<(), StoreError> {
        write_json(&self.words_path(), dictionary)?;
        tracing::info!("Saved {} words", dictionary.len());
        Ok(())
    }

    pub fn save_used_set(&self, used: &UsedSet) -> Result<(), StoreError> {
        write_json(&self.used_words_path(), used)?;
        tracing::debug!("Saved {} used words", used.count_used());
        Ok(())
    }
}

/// `Ok(None)` when the file does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Replace `path` with the pretty-printed value. The new content goes to a
/// temp file in the same directory first, so a failed write leaves the old
/// file intact.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;

    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    temp_file.write_all(json.as_bytes()).map_err(write_err)?;
    temp_file.flush().map_err(write_err)?;
    temp_file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slova_types::WordEntry;

    #[test]
    fn test_missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordStore::new(StoreConfig::with_root(dir.path().join("nested")));

        let dictionary: Dictionary = [WordEntry::new("1", "the", "определённый артикль")]
            .into_iter()
            .collect();
        store.save_dictionary(&dictionary).unwrap();

        assert_eq!(store.load_dictionary().unwrap(), dictionary);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordStore::new(StoreConfig::with_root(dir.path()));

        store.save_used_set(&["3", "1"].into_iter().collect()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["used_words.json"]);
    }
}
