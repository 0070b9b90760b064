/// Progress reporting for the detail page loop.
/// Purely cosmetic, nothing here changes what gets scraped.
pub trait Progress {
    /// Called once with the number of links about to be scraped.
    fn begin(&mut self, _total: usize) {}

    /// Called after each link, whether or not it produced a record.
    fn item_done(&mut self, _url: &str) {}

    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

const BAR_WIDTH: usize = 40;

/// Writes a text progress bar to the log at `info`.
#[derive(Debug, Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl LogProgress {
    fn render(&self) -> String {
        let percent = if self.total == 0 {
            100
        } else {
            self.done * 100 / self.total
        };
        let filled = percent * BAR_WIDTH / 100;
        format!(
            "Crawling the site: [{}{}] {:>3}%",
            "=".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            percent
        )
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        log::info!("{}", self.render());
    }

    fn item_done(&mut self, url: &str) {
        self.done = (self.done + 1).min(self.total);
        log::debug!("done with {}", url);
        log::info!("{}", self.render());
    }

    fn finish(&mut self) {
        self.done = self.total;
        log::info!("{}", self.render());
    }
}
