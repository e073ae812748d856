// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage and failure-path specs
//!
//! Exit codes: clap usage errors and command failures both exit 2,
//! distinct from the 0/1 split used for complete/incomplete runs.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn missing_required_flags_is_a_usage_error() {
    rail()
        .args(["is_completed", "--name", "R1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn selector_flags_are_mutually_exclusive() {
    rail_authed()
        .args(["is_completed", "--name", "R1", "--number", "2"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn a_selector_is_required() {
    rail_authed()
        .arg("is_completed")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn add_requires_suite_and_name() {
    rail_authed()
        .arg("add")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--suite"));
}

#[test]
fn unreachable_instance_exits_with_an_error_display() {
    rail_authed()
        .args(["is_completed", "--name", "R1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("could not reach TestRail"));
}

#[test]
fn password_can_come_from_the_environment() {
    // No --password flag; the env fallback must satisfy clap, so the
    // command gets as far as the (failing) network call.
    rail()
        .env("TESTRAIL_PASSWORD", "secret")
        .args([
            "--project",
            "Widgets",
            "--username",
            "qa",
            "--testrail",
            UNREACHABLE,
            "is_completed",
            "--name",
            "R1",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("could not reach TestRail"));
}
