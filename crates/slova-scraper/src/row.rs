use slova_types::WordEntry;

/// What happened to one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted {
        entry: WordEntry,
        /// The row had its own translation cell rather than borrowing the
        /// previous one
        own_translation: bool,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than three cells
    CellCount(usize),
    BadRank,
    EmptyWord,
    NoTranslation,
}

/// Classify a row from its cell texts.
///
/// Layouts:
/// - 4+ cells: rank, word, (ignored), translation. An empty translation cell
///   falls back to `carried`.
/// - 3 cells: rank, word, (ignored). The translation is always `carried`;
///   these are rows under a merged translation cell.
///
/// Cell texts are expected to be trimmed already.
pub fn classify_row<S: AsRef<str>>(cells: &[S], carried: Option<&str>) -> RowOutcome {
    let (rank, word, own) = match cells {
        [rank, word, _, own, ..] => (rank.as_ref(), word.as_ref(), Some(own.as_ref())),
        [rank, word, _] => (rank.as_ref(), word.as_ref(), None),
        _ => return RowOutcome::Skipped(SkipReason::CellCount(cells.len())),
    };

    if rank.parse::<i64>().is_err() {
        return RowOutcome::Skipped(SkipReason::BadRank);
    }
    if word.is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyWord);
    }

    let (translation, own_translation) = match own.filter(|t| !t.is_empty()) {
        Some(own) => (own, true),
        None => match carried.filter(|t| !t.is_empty()) {
            Some(carried) => (carried, false),
            None => return RowOutcome::Skipped(SkipReason::NoTranslation),
        },
    };

    RowOutcome::Accepted {
        entry: WordEntry::new(rank, word, translation),
        own_translation,
    }
}

/// Runs [`classify_row`] over consecutive rows, remembering the last own
/// translation of an accepted row.
#[derive(Debug, Default)]
pub struct RowClassifier {
    carried: Option<String>,
}

impl RowClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify<S: AsRef<str>>(&mut self, cells: &[S]) -> RowOutcome {
        let outcome = classify_row(cells, self.carried.as_deref());

        if let RowOutcome::Accepted {
            entry,
            own_translation: true,
        } = &outcome
        {
            self.carried = Some(entry.translation.clone());
        }

        outcome
    }

    pub fn carried(&self) -> Option<&str> {
        self.carried.as_deref()
    }
}
