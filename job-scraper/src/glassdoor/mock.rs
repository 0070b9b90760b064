use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::glassdoor::scraper::Fetch;
use crate::types::{Error, Result};

/// Serves canned pages and records every url it was asked for.
/// Urls without a page fail like an unreachable host.
#[derive(Default)]
pub(crate) struct MockFetcher {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub(crate) fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_owned(), html.to_owned());
        self
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requested.lock().unwrap().push(url.to_owned());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::IoError(io::Error::new(io::ErrorKind::ConnectionRefused, url.to_owned())))
    }
}
