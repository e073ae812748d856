//! `add` command

use clap::Args;
use rail_core::{RailError, TestRail, Transport};
use std::process::ExitCode;

#[derive(Args)]
pub struct AddArgs {
    /// Test suite name
    #[arg(long)]
    pub suite: String,

    /// Test run name
    #[arg(long)]
    pub name: String,

    /// Milestone name
    #[arg(long)]
    pub milestone: Option<String>,
}

pub fn run<T: Transport>(
    rail: &TestRail<T>,
    project: &str,
    args: AddArgs,
) -> Result<ExitCode, RailError> {
    let id = rail.add_run(project, &args.suite, &args.name, args.milestone.as_deref())?;
    println!("ok - added {}", id);
    Ok(ExitCode::SUCCESS)
}
