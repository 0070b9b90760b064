use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("File error: '{0}'")]
    IoError(#[from] std::io::Error),
    #[error("Csv error: '{0}'")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: '{0}'")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
