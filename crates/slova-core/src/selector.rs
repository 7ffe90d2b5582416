use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use slova_types::{Dictionary, Rank, UsedSet, WordEntry};

use crate::error::{SelectError, StoreError};
use crate::store::WordStore;

/// Destination for the updated used-word marks
pub trait UsedSetSink {
    fn save_used_set(&self, used: &UsedSet) -> Result<(), StoreError>;
}

impl UsedSetSink for WordStore {
    fn save_used_set(&self, used: &UsedSet) -> Result<(), StoreError> {
        WordStore::save_used_set(self, used)
    }
}

/// Result of one selection run
#[derive(Debug, Clone)]
pub struct Selection {
    pub entries: Vec<WordEntry>,
    /// Marks after this selection, already persisted
    pub used: UsedSet,
    /// Batch size asked for before clamping
    pub requested: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fewer words were left than asked for
    pub fn was_clamped(&self) -> bool {
        self.entries.len() < self.requested
    }
}

fn candidates<'a>(dictionary: &'a Dictionary, used: &UsedSet) -> Vec<&'a Rank> {
    dictionary
        .ranks()
        .filter(|rank| !used.is_used(rank))
        .collect()
}

/// Number of dictionary words not yet shown
pub fn remaining(dictionary: &Dictionary, used: &UsedSet) -> usize {
    dictionary.ranks().filter(|rank| !used.is_used(rank)).count()
}

/// Pick up to `n` words that are not yet in `used`, mark them and persist the
/// marks through `sink`.
///
/// `used` is never modified; the updated set is returned in the
/// [`Selection`] only after the sink accepted it. Fails with
/// [`SelectError::Exhausted`] when every word has been shown.
pub fn select_unused<S, R>(
    sink: &S,
    dictionary: &Dictionary,
    used: &UsedSet,
    n: usize,
    rng: &mut R,
) -> Result<Selection, SelectError>
where
    S: UsedSetSink + ?Sized,
    R: Rng + ?Sized,
{
    let mut unused = candidates(dictionary, used);
    if unused.is_empty() {
        return Err(SelectError::Exhausted);
    }

    let take = n.min(unused.len());
    if take < n {
        tracing::warn!("Only {} unused words available, requested {}", take, n);
    }

    unused.shuffle(rng);

    let mut updated = used.clone();
    let entries: Vec<WordEntry> = unused[..take]
        .iter()
        .filter_map(|rank| dictionary.entry(rank))
        .inspect(|entry| updated.mark(entry.rank.clone()))
        .collect();

    sink.save_used_set(&updated)?;
    tracing::debug!("Selected {} words", entries.len());

    Ok(Selection {
        entries,
        used: updated,
        requested: n,
    })
}

/// Random source for production runs, seeded from the wall clock
pub fn time_seeded_rng() -> StdRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or_default();
    StdRng::seed_from_u64(seed)
}
