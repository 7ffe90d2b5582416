mod error;
mod row;
mod source;
mod table;

pub use error::ScrapeError;
pub use row::{RowClassifier, RowOutcome, SkipReason, classify_row};
pub use source::{HttpSource, PageSource};
pub use table::{normalize_cell, parse_dictionary};

use slova_core::WordStore;
use slova_types::Dictionary;

/// Fetch `url` and extract every word table on the page
pub async fn scrape<P>(source: &P, url: &str) -> Result<Dictionary, ScrapeError>
where
    P: PageSource + ?Sized,
{
    tracing::info!("Fetching {url}");
    let body = source.fetch(url).await?;
    let dictionary = parse_dictionary(&body)?;

    if dictionary.is_empty() {
        tracing::warn!("No word rows found on {url}");
    }

    Ok(dictionary)
}

/// Scrape `url` and replace the stored dictionary with the result.
/// Returns the number of words written.
pub async fn scrape_into<P>(source: &P, url: &str, store: &WordStore) -> Result<usize, ScrapeError>
where
    P: PageSource + ?Sized,
{
    let dictionary = scrape(source, url).await?;
    store.save_dictionary(&dictionary)?;
    Ok(dictionary.len())
}
