use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde::Serialize;

use crate::glassdoor::types::{Field, JobRecord};
use crate::types::Result;

/// Header row, in output column order.
pub const COLUMNS: [&str; 8] = [
    "job_title",
    "company_name",
    "location",
    "salary_estimated",
    "salary_min",
    "salary_max",
    "date_posted",
    "job_description",
];

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Most characters Excel keeps in a single cell.
pub const MAX_CELL_CHARS: usize = 32_767;

/// A `JobRecord` flattened into spreadsheet cells.
/// `None` is written as an empty cell.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub salary_estimated: Option<String>,
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,
    pub date_posted: NaiveDate,
    /// Bullet points, one per line.
    pub job_description: String,
}

impl From<&JobRecord> for Row {
    fn from(job: &JobRecord) -> Self {
        let cell = |field: &Field| field.as_deref().map(String::from);
        Row {
            job_title: cell(&job.job_title),
            company_name: cell(&job.company_name),
            location: cell(&job.location),
            salary_estimated: cell(&job.salary_estimated),
            salary_min: cell(&job.salary_min),
            salary_max: cell(&job.salary_max),
            date_posted: job.date_posted,
            job_description: job.job_description.join("\n"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// `.csv` destinations get csv, everything else a workbook.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Xlsx,
        }
    }
}

/// One row per record, in the order the records were scraped.
pub fn assemble(jobs: &[JobRecord]) -> Dataset {
    Dataset {
        rows: jobs.iter().map(Row::from).collect(),
    }
}

/// Write `dataset` as a single sheet with a header row.
pub fn write(dataset: &Dataset, path: &Path) -> Result<()> {
    log::debug!("writing {} rows to {}", dataset.rows.len(), path.display());
    match ExportFormat::from_path(path) {
        ExportFormat::Csv => write_csv(dataset, path),
        ExportFormat::Xlsx => write_xlsx(dataset, path),
    }
}

fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(COLUMNS)?;
    for row in &dataset.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year()).ok()?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}

/// Cut `text` down to what fits in one cell.
fn cell_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            log::warn!(
                "cell of {} characters truncated to {}",
                text.chars().count(),
                MAX_CELL_CHARS
            );
            &text[..end]
        }
        None => text,
    }
}

fn write_xlsx(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format(DATE_FORMAT);
    let worksheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }
    for (i, row) in dataset.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let texts = [
            &row.job_title,
            &row.company_name,
            &row.location,
            &row.salary_estimated,
            &row.salary_min,
            &row.salary_max,
        ];
        for (col, text) in texts.into_iter().enumerate() {
            if let Some(text) = text {
                worksheet.write_string(r, col as u16, cell_text(text))?;
            }
        }
        match excel_date(row.date_posted) {
            Some(date) => {
                worksheet.write_datetime_with_format(r, 6, &date, &date_format)?;
            }
            None => {
                worksheet.write_string(r, 6, &row.date_posted.to_string())?;
            }
        }
        if !row.job_description.is_empty() {
            worksheet.write_string(r, 7, cell_text(&row.job_description))?;
        }
    }
    workbook.save(path)?;
    Ok(())
}
