// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Core errors carry the facts; this module turns them into a display
//! with what went wrong, why it might have happened, and how to fix it.

use rail_core::{Entity, RailError};
use std::fmt;

/// Error display for the terminal.
#[derive(Debug)]
pub struct CommandError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl CommandError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

/// Map a core error to its terminal display.
pub fn explain(err: &RailError) -> CommandError {
    match err {
        RailError::NotFound { kind, name } => {
            let base = CommandError::new(format!("{} not found: {}", kind, name))
                .with_context("names are matched exactly, including case");
            match kind {
                Entity::Project => {
                    base.with_suggestion("check the project name in the TestRail sidebar")
                }
                Entity::Run => base
                    .with_suggestion("check the run name or number on the project's run page")
                    .with_suggestion("completed runs stay listed; deleted runs do not"),
                _ => base.with_suggestion(format!(
                    "check the {} name on the project's pages",
                    kind
                )),
            }
        }
        RailError::DuplicateName(name) => {
            CommandError::new(format!("run name already used: {}", name))
                .with_context("run names must be unique within a project")
                .with_suggestion("pick a name not present in the project's run list")
        }
        RailError::Api(message) => CommandError::new(format!("TestRail error: {}", message))
            .with_context("the instance rejected the request"),
        RailError::Transport(source) => CommandError::new("could not reach TestRail")
            .with_context(source.to_string())
            .with_suggestion("check the --testrail URL and your network connection"),
        RailError::Decode(source) => {
            CommandError::new("TestRail answered with an unexpected payload")
                .with_context(source.to_string())
                .with_suggestion("check that --testrail points at a TestRail installation")
        }
    }
}
