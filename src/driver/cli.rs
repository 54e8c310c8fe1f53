//! Command line arguments

use crate::report::DEFAULT_REQUEST_COLUMN;
use crate::report::DEFAULT_REVIEW_COLUMN;
use crate::table::filter::DEFAULT_ID_COLUMN;
use crate::table::filter::DEFAULT_REVIEWER_COLUMN;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use clap::Parser;
use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Weekly report of new and reviewed review requests from an xlsx workbook
#[derive(Parser, Debug, Clone)]
#[command(name = "review-report", version)]
#[command(about = "Weekly report of new and reviewed review requests", long_about = None)]
pub struct Args {
    /// Path or http(s) URL of the workbook
    #[arg(env = "REVIEW_REPORT_SOURCE")]
    pub source: String,

    /// User name for HTTP Basic authentication
    #[arg(short, long, env = "REVIEW_REPORT_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP Basic authentication
    #[arg(short, long, env = "REVIEW_REPORT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Ask for credentials on standard input
    #[arg(long, conflicts_with_all = ["username", "password"])]
    pub prompt: bool,

    /// Reference instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS), defaults to now
    #[arg(long, value_parser = parse_reference)]
    pub reference: Option<NaiveDateTime>,

    /// Date column of new requests
    #[arg(long, default_value = DEFAULT_REQUEST_COLUMN)]
    pub request_column: String,

    /// Date column of completed reviews
    #[arg(long, default_value = DEFAULT_REVIEW_COLUMN)]
    pub review_column: String,

    /// Identifier column printed for every matching row
    #[arg(long, default_value = DEFAULT_ID_COLUMN)]
    pub id_column: String,

    /// Column that must be non-empty for a request to count as reviewed
    #[arg(long, default_value = DEFAULT_REVIEWER_COLUMN)]
    pub reviewer_column: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Exit with status 1 when loading or filtering fails
    #[arg(long)]
    pub strict: bool,
}

/// Parses `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN)))
        .map_err(|_| format!("invalid reference '{value}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"))
}
