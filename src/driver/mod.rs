//! # Command line driver
//!
//! Parses arguments, assembles the credential provider, clock and source,
//! then runs the report.
//!
//! - **cli**: argument parsing
//! - **workflow**: acquisition, filtering and rendering of one run

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use cli::OutputFormat;
pub use workflow::ReportWorkflow;
pub use workflow::RunStatus;
