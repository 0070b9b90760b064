use chrono::NaiveDate;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::glassdoor::date;
use crate::glassdoor::types::{Field, JobRecord};

/// En dash + no-break space that separates company and location,
/// plus the same bytes when a page gets decoded as windows-1252.
const LOCATION_SEPARATORS: [&str; 2] = ["\u{2013}\u{a0}", "\u{e2}\u{20ac}\u{201c}\u{a0}"];

lazy_static! {
    static ref TITLE: Selector = Selector::parse("h2.noMargTop.margBotXs.strong").unwrap();
    static ref COMPANY: Selector = Selector::parse("span.strong.ib").unwrap();
    static ref LOCATION: Selector = Selector::parse("span.subtle.ib").unwrap();
    static ref SALARY_ESTIMATED: Selector = Selector::parse("h2.salEst").unwrap();
    static ref SALARY_MIN: Selector = Selector::parse("div.minor.cell.alignLt").unwrap();
    static ref SALARY_MAX: Selector = Selector::parse("div.minor.cell.alignRt").unwrap();
    static ref POSTED: Selector = Selector::parse("span.minor.nowrap").unwrap();
    static ref DESCRIPTION: Selector = Selector::parse("div.jobDesc").unwrap();
    static ref BULLET: Selector = Selector::parse("li").unwrap();
}

fn trimmed_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_owned()
}

fn lookup(doc: &Html, selector: &Selector, name: &str) -> Field {
    match doc.select(selector).next() {
        Some(el) => Field::Value(trimmed_text(el)),
        None => {
            log::debug!("no element for field '{}'", name);
            Field::Missing
        }
    }
}

fn strip_location_separator(location: String) -> String {
    LOCATION_SEPARATORS
        .iter()
        .fold(location, |loc, sep| loc.replace(sep, ""))
}

fn description(doc: &Html) -> Vec<String> {
    match doc.select(&DESCRIPTION).next() {
        Some(container) => container.select(&BULLET).map(trimmed_text).collect(),
        None => {
            log::debug!("no description container");
            Vec::new()
        }
    }
}

fn date_posted(doc: &Html, today: NaiveDate) -> NaiveDate {
    doc.select(&POSTED)
        .next()
        .map(|el| date::resolve(&trimmed_text(el), today))
        .unwrap_or(today)
}

/// Pull a `JobRecord` out of a detail page.
///
/// Never fails: every field that can't be found becomes `Field::Missing`,
/// the description falls back to no bullets and the posting date to `today`.
pub fn extract(html: &str, today: NaiveDate) -> JobRecord {
    let doc = Html::parse_document(html);
    JobRecord {
        job_title: lookup(&doc, &TITLE, "job_title"),
        company_name: lookup(&doc, &COMPANY, "company_name"),
        location: lookup(&doc, &LOCATION, "location").map(strip_location_separator),
        salary_estimated: lookup(&doc, &SALARY_ESTIMATED, "salary_estimated"),
        salary_min: lookup(&doc, &SALARY_MIN, "salary_min"),
        salary_max: lookup(&doc, &SALARY_MAX, "salary_max"),
        date_posted: date_posted(&doc, today),
        job_description: description(&doc),
    }
}
