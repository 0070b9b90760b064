use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PAGE_COUNT: u32 = 30;
pub const DEFAULT_SEARCH_URL: &str =
    "https://www.glassdoor.com/Job/data-scientist-jobs-SRCH_KO0,14_IP{page}.htm";
pub const DEFAULT_ORIGIN: &str = "https://www.glassdoor.com";
pub const DEFAULT_OUTPUT_PATH: &str = "data_glassdoor.xlsx";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Placeholder in `search_url` that is replaced by the page number.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Everything a scrape run needs to know up front.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of search result pages to walk, starting at 1.
    pub page_count: u32,
    pub search_url: String,
    /// Prefixed to the relative hrefs found on result pages.
    pub origin: String,
    pub output_path: PathBuf,
    pub user_agent: String,
    /// Pause after every network call.
    pub request_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_count: DEFAULT_PAGE_COUNT,
            search_url: DEFAULT_SEARCH_URL.to_owned(),
            origin: DEFAULT_ORIGIN.to_owned(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

impl Config {
    /// Url of the search result page `page`.
    /// Templates without a `{page}` placeholder are treated as a prefix
    /// that the page number and `.htm` get appended to.
    pub fn page_url(&self, page: u32) -> String {
        if self.search_url.contains(PAGE_PLACEHOLDER) {
            self.search_url.replace(PAGE_PLACEHOLDER, &page.to_string())
        } else {
            format!("{}{}.htm", self.search_url, page)
        }
    }
}
