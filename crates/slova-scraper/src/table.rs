use scraper::{ElementRef, Html, Selector};
use slova_types::Dictionary;
use unicode_normalization::UnicodeNormalization;

use crate::error::ScrapeError;
use crate::row::{RowClassifier, RowOutcome};

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("bad selector {css:?}: {e}")))
}

/// Trimmed, NFC-normalized text of a cell
pub fn normalize_cell(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    text.nfc().collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    normalize_cell(&raw)
}

/// Walk every `<table>` on the page and collect the word rows.
///
/// Only `<td>` cells count, so header rows built from `<th>` are skipped.
/// The carried translation is shared across all tables on the page, and a
/// later row with the same rank replaces an earlier one.
pub fn parse_dictionary(html: &str) -> Result<Dictionary, ScrapeError> {
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let document = Html::parse_document(html);
    let mut classifier = RowClassifier::new();
    let mut dictionary = Dictionary::new();
    let mut tables = 0usize;
    let mut skipped = 0usize;

    for table in document.select(&table_sel) {
        tables += 1;

        for row in table.select(&row_sel) {
            let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();

            match classifier.classify(cells.as_slice()) {
                RowOutcome::Accepted { entry, .. } => {
                    if let Some(previous) = dictionary.insert(entry) {
                        tracing::debug!("Rank replaced, dropped {:?}", previous.word);
                    }
                }
                RowOutcome::Skipped(reason) => {
                    skipped += 1;
                    tracing::debug!("Skipped row {:?}: {:?}", cells, reason);
                }
            }
        }
    }

    tracing::info!(
        "Parsed {} words from {} tables ({} rows skipped)",
        dictionary.len(),
        tables,
        skipped
    );

    Ok(dictionary)
}
