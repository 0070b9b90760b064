pub mod config;
pub mod export;
pub mod glassdoor;
pub mod progress;
pub mod types;

pub use config::Config;
pub use types::{Error, Result};
