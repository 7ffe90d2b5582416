use std::io::{BufRead, Write};

use anyhow::Context;
use rand::Rng;
use slova_config::Config;
use slova_core::{WordStore, remaining, select_unused};
use slova_scraper::{PageSource, scrape_into};

use crate::prompt::ask_scrape;

/// One interactive session: optionally re-scrape, then show a batch of
/// words that have not been shown before.
pub async fn run<P, R, W, G>(
    config: &Config,
    source: &P,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()>
where
    P: PageSource + ?Sized,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let store = WordStore::new(config.store.clone());

    let parse = ask_scrape(input, out).context("Failed to read input")?;

    if parse {
        writeln!(out, "Starting site parsing...")?;
        let written = scrape_into(source, &config.source.url, &store)
            .await
            .context("Parsing failed")?;
        writeln!(out, "Successfully parsed {written} words")?;
        writeln!(out, "Parsing complete")?;
    }

    let dictionary = store
        .load_dictionary()
        .context("Failed to load words")?;
    let used = store
        .load_used_set()
        .context("Failed to load used words")?;
    tracing::info!(
        "{} of {} words not shown yet",
        remaining(&dictionary, &used),
        dictionary.len()
    );

    let selection = select_unused(&store, &dictionary, &used, config.batch_size, rng)?;

    if selection.was_clamped() {
        writeln!(
            out,
            "Warning: only {} unused words available",
            selection.len()
        )?;
    }

    writeln!(out, "\n=== {} random words ===", selection.len())?;
    for entry in &selection.entries {
        writeln!(out, "{entry}")?;
    }

    Ok(())
}
