//! # Workbook loading
//!
//! Reads the first worksheet of an Excel `.xlsx` workbook into a [`Table`].
//! The first non-empty row is the header; date-formatted numbers and ISO 8601
//! cells become [`crate::table::Value::DateTime`].
mod cell;
mod excel;
mod reference;
mod sheet;
mod xlsx;

use crate::error::ReportError;
use crate::error::ResultMessage;
use crate::source::Source;
use crate::table::Table;
use log::info;
use thiserror::Error;
use xlsx::XlsxSpreadsheet;

#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("Missing workbook part: '{0}'")]
    FileError(String),

    #[error("'{0}' is password protected or not an xlsx workbook")]
    SpreadsheetProtectedError(String),

    #[error("No worksheet found in '{0}'")]
    SpreadsheetEmptyError(String),

    #[error("Missing header row in sheet '{1}' of '{0}'")]
    MissingHeaderRowError(String, String),

    #[error("Invalid cell value at '{2}' in sheet '{1}' of '{0}': {3}")]
    CellValueError(String, String, String, String),
}

/// Loads the first worksheet of the workbook at `source`.
///
/// Remote sources are downloaded in full first. Any failure, from the HTTP
/// status to a malformed cell, is returned rather than logged.
pub fn load_table(source: &Source) -> Result<Table, ReportError> {
    let mut spreadsheet = XlsxSpreadsheet::open(source).with_prefix(&format!("Open '{}' failed", source))?;
    let shared_strings = spreadsheet.load_shared_strings()?;
    let sheet = spreadsheet.read_first_sheet()?;
    let sheet_name = sheet.name.to_owned();
    let table = sheet.into_table(&shared_strings)?;
    info!(
        "Loaded {} row(s) and {} column(s) from sheet '{}' of {}",
        table.len(),
        table.columns().len(),
        sheet_name,
        spreadsheet.name
    );
    Ok(table)
}
