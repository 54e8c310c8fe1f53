use super::Table;
use crate::week::WeekWindow;
use log::debug;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_ID_COLUMN: &str = "Card Link";
pub const DEFAULT_REVIEWER_COLUMN: &str = "Reviewer";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("The column '{column}' does not exist in the table.")]
    ColumnNotFound { column: String },
}

/// Identifiers of the matching rows, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    pub count: usize,
    pub items: Vec<String>,
}

/// Selects rows whose date column falls inside a week window.
///
/// The identifier column is projected out of every surviving row; the
/// reviewer column is only consulted for reviewed-only filtering.
#[derive(Debug, Clone)]
pub struct TableFilter {
    id_column: String,
    reviewer_column: String,
}

impl Default for TableFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ID_COLUMN, DEFAULT_REVIEWER_COLUMN)
    }
}

impl TableFilter {
    pub fn new(id_column: &str, reviewer_column: &str) -> Self {
        Self {
            id_column: id_column.to_owned(),
            reviewer_column: reviewer_column.to_owned(),
        }
    }

    /// Keeps rows with `window.start <= row[date_column] <= window.end`.
    ///
    /// Only date-time cells can match; text that merely looks like a date is
    /// not parsed here. With `reviewed_only`, rows whose reviewer is empty are
    /// dropped as well; a whitespace-only reviewer still counts.
    pub fn filter_by_date_column(
        &self,
        table: &Table,
        date_column: &str,
        window: &WeekWindow,
        reviewed_only: bool,
    ) -> Result<FilterResult, FilterError> {
        let date_index = column(table, date_column)?;
        let id_index = column(table, &self.id_column)?;
        let reviewer_index = if reviewed_only {
            Some(column(table, &self.reviewer_column)?)
        } else {
            None
        };

        let items: Vec<String> = table
            .rows()
            .iter()
            .filter(|row| {
                row.get(date_index)
                    .as_datetime()
                    .map(|datetime| window.contains(datetime))
                    .unwrap_or(false)
            })
            .filter(|row| reviewer_index.map(|index| !row.get(index).is_blank()).unwrap_or(true))
            .map(|row| row.get(id_index).to_string())
            .collect();

        debug!(
            "{} of {} rows match '{}' between {} and {}{}",
            items.len(),
            table.len(),
            date_column,
            window.start,
            window.end,
            if reviewed_only { " (reviewed only)" } else { "" }
        );
        Ok(FilterResult {
            count: items.len(),
            items,
        })
    }
}

fn column(table: &Table, name: &str) -> Result<usize, FilterError> {
    table.column_index(name).ok_or_else(|| FilterError::ColumnNotFound {
        column: name.to_owned(),
    })
}
