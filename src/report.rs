//! Weekly review report: the two filtered sections and their rendering.

use crate::error::ReportError;
use crate::table::filter::FilterError;
use crate::table::filter::FilterResult;
use crate::table::filter::TableFilter;
use crate::table::filter::DEFAULT_ID_COLUMN;
use crate::table::filter::DEFAULT_REVIEWER_COLUMN;
use crate::table::Table;
use crate::week::WeekWindow;
use crate::week::DATETIME_FORMAT;
use serde_json::json;
use serde_json::Value as JsonValue;

pub const DEFAULT_REQUEST_COLUMN: &str = "Request Time";
pub const DEFAULT_REVIEW_COLUMN: &str = "Review Done Time";

/// Column names a report reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportColumns {
    /// Date column of new requests
    pub request: String,
    /// Date column of completed reviews
    pub review: String,
    pub id: String,
    pub reviewer: String,
}

impl Default for ReportColumns {
    fn default() -> Self {
        Self {
            request: DEFAULT_REQUEST_COLUMN.to_owned(),
            review: DEFAULT_REVIEW_COLUMN.to_owned(),
            id: DEFAULT_ID_COLUMN.to_owned(),
            reviewer: DEFAULT_REVIEWER_COLUMN.to_owned(),
        }
    }
}

/// Both sections of a weekly report.
///
/// Each section keeps its own outcome, a missing column in one does not
/// hide the other.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewReport {
    pub window: WeekWindow,
    /// Rows whose request time falls in the week
    pub new_requests: Result<FilterResult, FilterError>,
    /// Reviewed rows whose review time falls in the week
    pub reviewed_requests: Result<FilterResult, FilterError>,
}

impl ReviewReport {
    pub fn build(table: &Table, window: WeekWindow, columns: &ReportColumns) -> Self {
        let filter = TableFilter::new(&columns.id, &columns.reviewer);
        Self {
            window,
            new_requests: filter.filter_by_date_column(table, &columns.request, &window, false),
            reviewed_requests: filter.filter_by_date_column(table, &columns.review, &window, true),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.new_requests.is_err() || self.reviewed_requests.is_err()
    }

    pub fn render_text(&self) -> String {
        let mut text = render_window_text(&self.window);
        render_section(
            &mut text,
            "Filtered result set based on new requests added to file:",
            "New review requests count",
            &self.new_requests,
        );
        render_section(
            &mut text,
            "Filtered result set based on Review Done Time:",
            "Reviewed requests count",
            &self.reviewed_requests,
        );
        text
    }

    pub fn render_json(&self) -> Result<String, ReportError> {
        let week = serde_json::to_value(self.window)?;
        let new_requests = section_json(&self.new_requests)?;
        let reviewed_requests = section_json(&self.reviewed_requests)?;
        let output = json!({
            "week": week,
            "new_requests": new_requests,
            "reviewed_requests": reviewed_requests,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

/// The two window lines that open every text report.
pub fn render_window_text(window: &WeekWindow) -> String {
    format!(
        "Start of the week (Monday at 12 AM): {}\nEnd of the week (Sunday at 11:59:59 PM): {}\n",
        window.start.format(DATETIME_FORMAT),
        window.end.format(DATETIME_FORMAT)
    )
}

/// JSON for a run whose workbook could not be loaded.
pub fn render_load_error_json(window: &WeekWindow, error: &ReportError) -> Result<String, ReportError> {
    let week = serde_json::to_value(window)?;
    let output = json!({
        "week": week,
        "error": error.to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn render_section(text: &mut String, title: &str, count_label: &str, section: &Result<FilterResult, FilterError>) {
    match section {
        Ok(result) => {
            text.push_str(title);
            text.push('\n');
            for item in &result.items {
                text.push_str(item);
                text.push('\n');
            }
            text.push_str(&format!("{count_label}: {}\n", result.count));
        }
        Err(error) => text.push_str(&format!("{error}\n")),
    }
}

/// `{count, items}` on success, `{error}` when the section failed
fn section_json(section: &Result<FilterResult, FilterError>) -> Result<JsonValue, ReportError> {
    match section {
        Ok(result) => Ok(serde_json::to_value(result)?),
        Err(error) => Ok(json!({ "error": error.to_string() })),
    }
}
