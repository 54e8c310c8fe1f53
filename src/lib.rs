//! # Weekly Review Report
//!
//! Reads a spreadsheet of review requests and reports, for the week
//! containing a reference instant, which requests were added and which
//! were reviewed.
//!
//! ## Features
//!
//! - **Week window**: Monday 00:00:00 to Sunday 23:59:59, from an injected [`week::Clock`]
//! - **Workbook loading**: first sheet of an `.xlsx` file, read from disk or over
//!   HTTP(S) with optional Basic authentication
//! - **Typed cells**: date-formatted numbers (1900 and 1904 date systems) and ISO 8601
//!   cells load as date-times
//! - **Filtering**: rows whose date column falls inside the window, optionally only
//!   reviewed rows, projected to their identifier
//! - **Output**: plain text or JSON
//!
//! ```no_run
//! use review_report::report::ReportColumns;
//! use review_report::report::ReviewReport;
//! use review_report::source::Source;
//! use review_report::source::StaticCredentials;
//! use review_report::spreadsheet::load_table;
//! use review_report::week::SystemClock;
//! use review_report::week::WeekWindow;
//! use std::time::Duration;
//!
//! let mut credentials = StaticCredentials::new(None, None);
//! let source = Source::resolve("requests.xlsx", &mut credentials, Duration::from_secs(30))?;
//! let table = load_table(&source)?;
//! let report = ReviewReport::build(&table, WeekWindow::current(&SystemClock), &ReportColumns::default());
//! print!("{}", report.render_text());
//! # Ok::<(), review_report::error::ReportError>(())
//! ```

pub mod driver;
pub mod error;
mod helpers;
pub mod report;
pub mod source;
pub mod spreadsheet;
pub mod table;
pub mod week;

pub use error::ReportError;
pub use report::ReviewReport;
pub use table::filter::FilterResult;
pub use table::filter::TableFilter;
pub use table::Table;
pub use week::WeekWindow;
