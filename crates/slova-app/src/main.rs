use std::io;

use slova_config::Config;
use slova_core::time_seeded_rng;
use slova_scraper::HttpSource;
use tracing_subscriber::EnvFilter;

pub mod prompt;
pub mod run;


#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = start().await {
        println!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn start() -> anyhow::Result<()> {
    let config = Config::new();
    let source = HttpSource::new(&config.source)?;
    let mut rng = time_seeded_rng();

    let stdin = io::stdin();
    let stdout = io::stdout();

    run::run(
        &config,
        &source,
        &mut rng,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .await
}
