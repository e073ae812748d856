// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rail - TestRail command line client

mod commands;
mod error;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{add, is_completed};
use rail_core::{Config, TestRail};

#[derive(Parser)]
#[command(
    name = "rail",
    version,
    about = "Query and mutate test runs in a TestRail instance"
)]
struct Cli {
    /// Project name
    #[arg(long)]
    project: String,

    /// TestRail account username
    #[arg(long, env = "TESTRAIL_USERNAME")]
    username: String,

    /// TestRail account password or API key
    #[arg(long, env = "TESTRAIL_PASSWORD", hide_env_values = true)]
    password: String,

    /// TestRail instance URL
    #[arg(long, env = "TESTRAIL_URL", default_value = rail_core::config::DEFAULT_URL)]
    testrail: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check test run status
    #[command(name = "is_completed")]
    IsCompleted(is_completed::IsCompletedArgs),
    /// Add a test run
    Add(add::AddArgs),
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    tracing::debug!(instance = %cli.testrail, "connecting");
    let rail = TestRail::connect(&Config::new(cli.testrail, cli.username, cli.password));

    let result = match cli.command {
        Commands::IsCompleted(args) => is_completed::run(&rail, &cli.project, args),
        Commands::Add(args) => add::run(&rail, &cli.project, args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprint!("{}", error::explain(&err));
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr; stdout is reserved for command output.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
