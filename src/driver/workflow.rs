//! Workflow Orchestration

use crate::driver::cli::Args;
use crate::driver::cli::OutputFormat;
use crate::error::ReportError;
use crate::report::render_load_error_json;
use crate::report::render_window_text;
use crate::report::ReportColumns;
use crate::report::ReviewReport;
use crate::source::CredentialProvider;
use crate::source::Source;
use crate::spreadsheet::load_table;
use crate::week::Clock;
use crate::week::WeekWindow;
use log::error;
use log::info;
use log::warn;
use std::io::Write;
use std::time::Duration;

/// Outcome of a run that produced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// The workbook could not be loaded or a section failed
    Degraded,
}

/// One report run, from source resolution to rendered output
pub struct ReportWorkflow {
    args: Args,
}

impl ReportWorkflow {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    fn columns(&self) -> ReportColumns {
        ReportColumns {
            request: self.args.request_column.to_owned(),
            review: self.args.review_column.to_owned(),
            id: self.args.id_column.to_owned(),
            reviewer: self.args.reviewer_column.to_owned(),
        }
    }

    /// Executes the report.
    ///
    /// The report goes to `out`, diagnostics to `err`. A failed load is
    /// reported and turns the run [`RunStatus::Degraded`] instead of
    /// returning an error; `Err` is left for failures writing the output.
    pub fn execute(
        &self,
        clock: &dyn Clock,
        provider: &mut dyn CredentialProvider,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<RunStatus, ReportError> {
        let window = WeekWindow::current(clock);
        info!("Reporting on week {} .. {}", window.start, window.end);
        if self.args.format == OutputFormat::Text {
            write!(out, "{}", render_window_text(&window))?;
        }

        let timeout = Duration::from_secs(self.args.timeout);
        let table = Source::resolve(&self.args.source, provider, timeout).and_then(|source| {
            info!("Loading workbook from {}", source);
            load_table(&source)
        });
        let table = match table {
            Ok(table) => table,
            Err(e) => {
                error!("Loading '{}' failed: {}", self.args.source, e);
                writeln!(err, "Error reading the Excel file: {e}")?;
                if self.args.format == OutputFormat::Json {
                    writeln!(out, "{}", render_load_error_json(&window, &e)?)?;
                }
                return Ok(RunStatus::Degraded);
            }
        };

        let report = ReviewReport::build(&table, window, &self.columns());
        for section in [&report.new_requests, &report.reviewed_requests] {
            if let Err(e) = section {
                warn!("{}", e);
            }
        }
        match self.args.format {
            OutputFormat::Text => write!(out, "{}", report.render_text())?,
            OutputFormat::Json => writeln!(out, "{}", report.render_json()?)?,
        }
        out.flush()?;

        Ok(if report.has_errors() {
            RunStatus::Degraded
        } else {
            RunStatus::Success
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Credentials;
    use crate::week::FixedClock;
    use chrono::NaiveDate;
    use clap::Parser;

    struct NoCredentials(usize);

    impl CredentialProvider for NoCredentials {
        fn credentials(&mut self) -> Result<Option<Credentials>, ReportError> {
            self.0 += 1;
            Ok(None)
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap().and_hms_opt(10, 0, 0).unwrap())
    }

    fn run(args: &[&str]) -> (RunStatus, String, String, usize) {
        let args = Args::try_parse_from(args).unwrap();
        let mut provider = NoCredentials(0);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = ReportWorkflow::new(args)
            .execute(&clock(), &mut provider, &mut out, &mut err)
            .unwrap();
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            provider.0,
        )
    }

    #[test]
    fn missing_local_file_degrades() {
        let (status, out, err, prompts) = run(&["review-report", "/nonexistent/requests.xlsx"]);
        assert_eq!(status, RunStatus::Degraded);
        assert!(out.starts_with("Start of the week (Monday at 12 AM): 2024-03-11 00:00:00\n"));
        assert!(!out.contains("count"));
        assert!(err.starts_with("Error reading the Excel file: "));
        assert_eq!(prompts, 0);
    }

    #[test]
    fn missing_local_file_json() {
        let (status, out, _, _) = run(&["review-report", "/nonexistent/requests.xlsx", "--format", "json"]);
        assert_eq!(status, RunStatus::Degraded);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["week"]["end"], "2024-03-17 23:59:59");
        assert!(json["error"].as_str().unwrap().contains("requests.xlsx"));
    }
}
