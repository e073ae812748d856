// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

use assert_cmd::Command;

/// Nothing serves TestRail on the discard port; connections fail fast.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Bare command with credential env vars cleared, so specs behave the
/// same on machines that export them.
pub fn rail() -> Command {
    let mut cmd = Command::cargo_bin("rail").unwrap();
    cmd.env_remove("TESTRAIL_USERNAME");
    cmd.env_remove("TESTRAIL_PASSWORD");
    cmd.env_remove("TESTRAIL_URL");
    cmd
}

/// Command with every required flag filled in, pointed at an
/// unreachable instance.
pub fn rail_authed() -> Command {
    let mut cmd = rail();
    cmd.args([
        "--project",
        "Widgets",
        "--username",
        "qa",
        "--password",
        "secret",
        "--testrail",
        UNREACHABLE,
    ]);
    cmd
}
