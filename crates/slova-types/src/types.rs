use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Position of a word in the frequency list, kept as the text found on the page
pub type Rank = String;

/// A word with its translation. On disk this is the single-entry object
/// `{"word": "translation"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub word: String,
    pub translation: String,
}

impl WordPair {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}

impl Serialize for WordPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.word, &self.translation)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for WordPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WordPairVisitor)
    }
}

struct WordPairVisitor;

impl<'de> Visitor<'de> for WordPairVisitor {
    type Value = WordPair;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with exactly one word/translation pair")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let Some((word, translation)) = map.next_entry::<String, String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };

        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }

        Ok(WordPair { word, translation })
    }
}

/// A dictionary row with its rank attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub rank: Rank,
    pub word: String,
    pub translation: String,
}

impl WordEntry {
    pub fn new(
        rank: impl Into<Rank>,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            rank: rank.into(),
            word: word.into(),
            translation: translation.into(),
        }
    }

    pub fn into_parts(self) -> (Rank, WordPair) {
        (
            self.rank,
            WordPair {
                word: self.word,
                translation: self.translation,
            },
        )
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {}", self.rank, self.word, self.translation)
    }
}

/// Rank -> word/translation mapping scraped from the frequency list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<Rank, WordPair>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, replacing whatever was stored at the same rank
    pub fn insert(&mut self, entry: WordEntry) -> Option<WordPair> {
        let (rank, pair) = entry.into_parts();
        self.entries.insert(rank, pair)
    }

    pub fn get(&self, rank: &str) -> Option<&WordPair> {
        self.entries.get(rank)
    }

    pub fn contains(&self, rank: &str) -> bool {
        self.entries.contains_key(rank)
    }

    /// Full entry for a rank, if present
    pub fn entry(&self, rank: &str) -> Option<WordEntry> {
        self.entries.get_key_value(rank).map(|(rank, pair)| WordEntry {
            rank: rank.clone(),
            word: pair.word.clone(),
            translation: pair.translation.clone(),
        })
    }

    pub fn ranks(&self) -> impl Iterator<Item = &Rank> {
        self.entries.keys()
    }
}

impl FromIterator<WordEntry> for Dictionary {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for entry in iter {
            dictionary.insert(entry);
        }
        dictionary
    }
}

/// Ranks that have already been shown. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedSet {
    marks: BTreeMap<Rank, bool>,
}

impl UsedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A rank counts as used only when it is present and marked `true`
    pub fn is_used(&self, rank: &str) -> bool {
        self.marks.get(rank).copied().unwrap_or(false)
    }

    pub fn mark(&mut self, rank: impl Into<Rank>) {
        self.marks.insert(rank.into(), true);
    }

    pub fn count_used(&self) -> usize {
        self.marks.values().filter(|used| **used).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count_used() == 0
    }
}

impl<R: Into<Rank>> FromIterator<R> for UsedSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut used = UsedSet::new();
        for rank in iter {
            used.mark(rank);
        }
        used
    }
}
