// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration
//!
//! Base URL and credentials are passed in explicitly at construction;
//! there is no ambient or global configuration state.

use std::fmt;

/// URL of the standard TestRail installation, used when `--testrail`
/// is not given.
pub const DEFAULT_URL: &str = "http://testrail.local/testrail/index.php";

/// Connection settings for a TestRail instance.
#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Config {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Root of the v2 API on this instance. Endpoint paths are appended
    /// directly to the returned string.
    pub fn api_root(&self) -> String {
        format!("{}?/api/v2/", self.base_url)
    }
}

// Manual Debug so the password never reaches logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
