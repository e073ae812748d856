// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote TestRail records
//!
//! Every value is fetched fresh per invocation; the client keeps no
//! local cache. Responses carry many more fields than modeled here,
//! serde drops the rest.

use serde::Deserialize;
use std::fmt;

/// Top-level container for test suites and runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

/// A named collection of test cases within a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suite {
    pub id: i64,
    pub name: String,
}

/// An optional grouping a run can be associated with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub name: String,
}

/// An executable instance of a suite, tracked for pass/fail/blocked
/// outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Run {
    pub id: i64,
    pub name: String,
    pub is_completed: bool,
    pub passed_count: i64,
    pub failed_count: i64,
    pub blocked_count: i64,
}

/// How a run is picked out of a project's run list: by name or by id.
///
/// The CLI's mutually exclusive `--name`/`--number` flags map onto the
/// two variants, so exactly one criterion is ever in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSelector {
    Name(String),
    Id(i64),
}

impl RunSelector {
    pub fn matches(&self, run: &Run) -> bool {
        match self {
            RunSelector::Name(name) => run.name == *name,
            RunSelector::Id(id) => run.id == *id,
        }
    }
}

impl fmt::Display for RunSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunSelector::Name(name) => write!(f, "{}", name),
            RunSelector::Id(id) => write!(f, "#{}", id),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
