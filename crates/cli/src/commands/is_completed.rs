// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `is_completed` command
//!
//! Reports whether a run has completed. The exit code distinguishes
//! complete (0) from incomplete (1); pass/fail content is reported
//! textually only.

use clap::Args;
use rail_core::{RailError, RunSelector, TestRail, Transport};
use std::process::ExitCode;

#[derive(Args)]
pub struct IsCompletedArgs {
    /// Test run number
    #[arg(long, conflicts_with = "name", required_unless_present = "name")]
    pub number: Option<i64>,

    /// Test run name
    #[arg(long)]
    pub name: Option<String>,
}

impl IsCompletedArgs {
    fn selector(self) -> RunSelector {
        match (self.number, self.name) {
            (Some(id), None) => RunSelector::Id(id),
            (None, Some(name)) => RunSelector::Name(name),
            // clap enforces exactly one of --number/--name
            _ => unreachable!(),
        }
    }
}

pub fn run<T: Transport>(
    rail: &TestRail<T>,
    project: &str,
    args: IsCompletedArgs,
) -> Result<ExitCode, RailError> {
    let run = rail.run_status(project, &args.selector())?;

    if !run.is_completed {
        println!("not ok - incomplete");
        return Ok(ExitCode::from(1));
    }

    let prefix = if run.failed_count > 0 || run.blocked_count > 0 {
        "not ok"
    } else {
        "ok"
    };
    println!(
        "{} - {} passed {} failed {} blocked",
        prefix, run.passed_count, run.failed_count, run.blocked_count
    );
    Ok(ExitCode::SUCCESS)
}
