use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::Client;

use crate::config::Config;
use crate::export;
use crate::glassdoor::extract::extract;
use crate::glassdoor::links::collect_all;
use crate::glassdoor::types::JobRecord;
use crate::progress::Progress;
use crate::types::Result;

/// Source of raw page markup.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain GET requests with the configured user agent, no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    /// Any answer from the server counts, error statuses included.
    /// Only transport failures are errors.
    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            log::warn!("{} answered with status {}, parsing the body anyway", url, status);
            log::debug!("body of {}: {}", url, body);
        }
        Ok(body)
    }
}

/// Fetch one detail page and turn it into a record.
pub async fn scrape_job_page(fetcher: &dyn Fetch, url: &str, today: NaiveDate) -> Result<JobRecord> {
    let html = fetcher.fetch(url).await?;
    Ok(extract(&html, today))
}

/// Scrape every link in turn, one request at a time with `delay` after each.
/// Links that fail are left out of the result.
pub async fn scrape_jobs<I>(
    fetcher: &dyn Fetch,
    links: I,
    today: NaiveDate,
    delay: Duration,
    progress: &mut dyn Progress,
) -> Vec<JobRecord>
where
    I: IntoIterator<Item = String>,
{
    let links = links.into_iter().collect::<Vec<_>>();
    progress.begin(links.len());
    let mut jobs = Vec::with_capacity(links.len());
    for link in &links {
        match scrape_job_page(fetcher, link, today).await {
            Ok(job) => jobs.push(job),
            Err(e) => log::warn!("skipping job {}: {}", link, e),
        }
        progress.item_done(link);
        tokio::time::sleep(delay).await;
    }
    progress.finish();
    jobs
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub links: usize,
    pub records: usize,
    pub output_path: PathBuf,
}

impl RunSummary {
    pub fn skipped(&self) -> usize {
        self.links - self.records
    }
}

/// Collect links, scrape every job and write the spreadsheet.
pub async fn run(
    config: &Config,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let links = collect_all(fetcher, config).await?;
    let link_count = links.len();
    let today = Local::now().date_naive();
    log::info!("Scraping {} jobs, posting ages relative to {}", link_count, today);
    let jobs = scrape_jobs(fetcher, links, today, config.request_delay, progress).await;

    let dataset = export::assemble(&jobs);
    export::write(&dataset, &config.output_path)?;
    log::info!(
        "Wrote {} of {} jobs to {}",
        jobs.len(),
        link_count,
        config.output_path.display()
    );
    Ok(RunSummary {
        links: link_count,
        records: jobs.len(),
        output_path: config.output_path.clone(),
    })
}
