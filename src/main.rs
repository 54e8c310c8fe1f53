//! review-report - weekly report of new and reviewed review requests

use anyhow::Result;
use clap::Parser;
use review_report::driver::Args;
use review_report::driver::ReportWorkflow;
use review_report::driver::RunStatus;
use review_report::source::CredentialProvider;
use review_report::source::PromptCredentials;
use review_report::source::StaticCredentials;
use review_report::week::Clock;
use review_report::week::FixedClock;
use review_report::week::SystemClock;
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let strict = args.strict;

    let clock: Box<dyn Clock> = match args.reference {
        Some(reference) => Box::new(FixedClock::new(reference)),
        None => Box::new(SystemClock),
    };
    let mut provider: Box<dyn CredentialProvider> = if args.prompt {
        Box::new(PromptCredentials::new(io::stdin().lock(), io::stderr()))
    } else {
        Box::new(StaticCredentials::new(args.username.clone(), args.password.clone()))
    };

    let workflow = ReportWorkflow::new(args);
    let status = workflow.execute(
        clock.as_ref(),
        provider.as_mut(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )?;

    Ok(match status {
        RunStatus::Degraded if strict => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
