use capsheet::{ScrapingContext, write_snapshot};
use dotenv::dotenv;

extern crate env_logger;
extern crate log;

use log::{LevelFilter, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let context = ScrapingContext::new()?;
    info!(
        "Scraping {} teams ({:?} layout)",
        context.roster.len(),
        context.scraping_config.layout
    );

    let snapshot = context
        .league_scraper
        .scrape(&context.roster, |entry| {
            println!("Finished parsing {}", entry.label)
        })
        .await;

    let output_path = &context.scraping_config.output_path;
    write_snapshot(&snapshot, output_path)?;
    info!("Wrote {} teams to {}", snapshot.len(), output_path.display());

    Ok(())
}
