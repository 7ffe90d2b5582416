pub mod types;

pub use types::{Dictionary, Rank, UsedSet, WordEntry, WordPair};
