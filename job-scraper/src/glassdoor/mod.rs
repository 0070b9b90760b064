pub mod date;
pub mod extract;
pub mod links;
pub mod scraper;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use self::types::{Field, JobRecord};
