// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version surface specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn help_lists_both_subcommands() {
    rail()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("is_completed").and(predicate::str::contains("add")));
}

#[test]
fn help_shows_connection_flags() {
    rail().arg("--help").assert().success().stdout(
        predicate::str::contains("--project")
            .and(predicate::str::contains("--username"))
            .and(predicate::str::contains("--password"))
            .and(predicate::str::contains("--testrail")),
    );
}

#[test]
fn is_completed_help_shows_both_selectors() {
    rail()
        .args(["is_completed", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--number").and(predicate::str::contains("--name")));
}

#[test]
fn add_help_shows_milestone_as_optional() {
    rail()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--milestone"));
}

#[test]
fn version_flag_reports_version() {
    rail()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rail"));
}
