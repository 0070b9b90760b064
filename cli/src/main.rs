mod scrape;

use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use job_scraper::config::{DEFAULT_OUTPUT_PATH, DEFAULT_PAGE_COUNT, DEFAULT_SEARCH_URL};

/// Scrape Glassdoor job postings into a spreadsheet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Number of search result pages to walk
    #[arg(long, env = "GLASSDOOR_PAGES", default_value_t = DEFAULT_PAGE_COUNT)]
    pages: u32,

    /// Search result url, `{page}` is replaced by the page number
    #[arg(long, env = "GLASSDOOR_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    /// Output file, `.csv` or `.xlsx`
    #[arg(long, env = "GLASSDOOR_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    if let Err(e) = scrape::scrape(args).await {
        log::error!("Scrape aborted: {}", e);
        std::process::exit(1);
    }
}
