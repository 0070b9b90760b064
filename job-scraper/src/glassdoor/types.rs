use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of looking up one field on a detail page.
///
/// `Missing` marks a page that did not carry the element at all and is
/// distinct from an element whose text is empty.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Value(String),
    Missing,
}

impl Field {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Field::Value(value) => Some(value),
            Field::Missing => None,
        }
    }

    pub fn map<F>(self, f: F) -> Field
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Field::Value(value) => Field::Value(f(value)),
            Field::Missing => Field::Missing,
        }
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        value.map_or(Field::Missing, Field::Value)
    }
}

/// One job posting as scraped from its detail page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub job_title: Field,
    pub company_name: Field,
    pub location: Field,
    pub salary_estimated: Field,
    pub salary_min: Field,
    pub salary_max: Field,
    pub date_posted: NaiveDate,
    /// Bullet points of the description, empty when the page has none.
    pub job_description: Vec<String>,
}
