use job_scraper::glassdoor::scraper::{run, HttpFetcher};
use job_scraper::progress::LogProgress;
use job_scraper::{Config, Result};

use crate::Cli;

impl From<Cli> for Config {
    fn from(args: Cli) -> Self {
        Config {
            page_count: args.pages,
            search_url: args.search_url,
            output_path: args.output,
            ..Config::default()
        }
    }
}

pub(crate) async fn scrape(args: Cli) -> Result<()> {
    let config = Config::from(args);
    log::info!(
        "Scraping {} pages of {} into {}",
        config.page_count,
        config.search_url,
        config.output_path.display()
    );
    let fetcher = HttpFetcher::new(&config.user_agent)?;
    let summary = run(&config, &fetcher, &mut LogProgress::default()).await?;
    log::info!(
        "Done: {} jobs written, {} skipped",
        summary.records,
        summary.skipped()
    );
    Ok(())
}
