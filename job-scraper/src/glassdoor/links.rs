use std::collections::HashSet;

use lazy_static::lazy_static;
use scraper::{Html, Selector};

use crate::config::Config;
use crate::glassdoor::scraper::Fetch;
use crate::types::Result;

lazy_static! {
    static ref JOB_LINK: Selector = Selector::parse("a.jobLink").unwrap();
}

/// Absolute urls of every job link on a search result page.
/// Anchors without an `href` are skipped.
pub fn collect_page_links(html: &str, origin: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(&JOB_LINK)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| format!("{}{}", origin, href))
        .collect()
}

/// Walk search result pages `1..=page_count` and gather the unique job links.
///
/// Every page is requested even when an earlier one came back empty.
/// A page that can't be fetched is logged and skipped, only a failure on the
/// very first page is returned since it means the site can't be reached at all.
pub async fn collect_all(fetcher: &dyn Fetch, config: &Config) -> Result<HashSet<String>> {
    log::info!("Collecting links from {} pages", config.page_count);
    let mut links = HashSet::new();
    for page in 1..=config.page_count {
        let url = config.page_url(page);
        log::debug!("requesting search page {}: {}", page, url);
        let result = fetcher.fetch(&url).await;
        tokio::time::sleep(config.request_delay).await;
        match result {
            Ok(html) => {
                let page_links = collect_page_links(&html, &config.origin);
                log::debug!("found {} links on page {}", page_links.len(), page);
                links.extend(page_links);
            }
            Err(e) if page == 1 => {
                log::error!("failed to load first search page {}: {}", url, e);
                return Err(e);
            }
            Err(e) => {
                log::warn!("skipping search page {}: {}", page, e);
            }
        }
    }
    log::info!("Found {} unique job links", links.len());
    Ok(links)
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;
    use crate::glassdoor::mock::MockFetcher;
    use crate::types::Error;

    const ORIGIN: &str = "https://www.glassdoor.com";

    fn config(page_count: u32) -> Config {
        Config {
            page_count,
            search_url: "https://search.test/jobs_IP{page}.htm".to_owned(),
            request_delay: Duration::ZERO,
            ..Config::default()
        }
    }

    fn result_page(hrefs: &[&str]) -> String {
        let anchors = hrefs
            .iter()
            .map(|href| format!(r#"<li><a class="jobLink" href="{}">Job</a></li>"#, href))
            .collect::<String>();
        format!("<html><body><ul>{}</ul></body></html>", anchors)
    }

    #[test]
    fn test_collect_page_links() {
        let html = r#"
<html><body>
  <a class="jobLink" href="/partner/jobListing.htm?jobListingId=1">Data Scientist</a>
  <a class="jobLink jobTitle" href="/partner/jobListing.htm?jobListingId=2">ML Engineer</a>
  <a class="jobLink">No href</a>
  <a class="other" href="/Overview/acme.htm">Acme</a>
</body></html>
"#;
        let links = collect_page_links(html, ORIGIN);
        assert_eq!(
            links,
            vec![
                "https://www.glassdoor.com/partner/jobListing.htm?jobListingId=1",
                "https://www.glassdoor.com/partner/jobListing.htm?jobListingId=2",
            ]
        );
    }

    #[tokio::test]
    async fn test_every_page_is_requested() {
        let fetcher = MockFetcher::default()
            .with_page("https://search.test/jobs_IP1.htm", &result_page(&[]))
            .with_page("https://search.test/jobs_IP2.htm", &result_page(&["/a"]))
            .with_page("https://search.test/jobs_IP3.htm", &result_page(&[]));
        let links = collect_all(&fetcher, &config(3)).await.unwrap();
        assert_eq!(
            fetcher.requested(),
            vec![
                "https://search.test/jobs_IP1.htm",
                "https://search.test/jobs_IP2.htm",
                "https://search.test/jobs_IP3.htm",
            ]
        );
        assert_eq!(links, HashSet::from([format!("{}/a", ORIGIN)]));
    }

    #[tokio::test]
    async fn test_links_are_deduplicated_across_pages() {
        let fetcher = MockFetcher::default()
            .with_page("https://search.test/jobs_IP1.htm", &result_page(&["/a", "/b"]))
            .with_page("https://search.test/jobs_IP2.htm", &result_page(&["/b", "/c"]));
        let links = collect_all(&fetcher, &config(2)).await.unwrap();
        assert_eq!(links.len(), 3);
        assert!(links.contains(&format!("{}/b", ORIGIN)));
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped() {
        let fetcher = MockFetcher::default()
            .with_page("https://search.test/jobs_IP1.htm", &result_page(&["/a"]))
            .with_page("https://search.test/jobs_IP3.htm", &result_page(&["/c"]));
        let links = collect_all(&fetcher, &config(3)).await.unwrap();
        assert_eq!(fetcher.requested().len(), 3);
        assert_eq!(
            links,
            HashSet::from([format!("{}/a", ORIGIN), format!("{}/c", ORIGIN)])
        );
    }

    #[tokio::test]
    async fn test_unreachable_first_page_aborts() {
        let fetcher = MockFetcher::default()
            .with_page("https://search.test/jobs_IP2.htm", &result_page(&["/b"]));
        let result = collect_all(&fetcher, &config(2)).await;
        assert!(matches!(result, Err(Error::IoError(_))));
        assert_eq!(fetcher.requested().len(), 1);
    }
}
