// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for client operations
//!
//! Every error aborts the current command; there is no retry and no
//! partial-success path.

use crate::transport::TransportError;
use std::fmt;
use thiserror::Error;

/// Kind of remote record a lookup was scanning for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Project,
    Suite,
    Milestone,
    Run,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Project => "project",
            Entity::Suite => "suite",
            Entity::Milestone => "milestone",
            Entity::Run => "run",
        };
        write!(f, "{}", name)
    }
}

/// Errors from TestRail client operations
#[derive(Debug, Error)]
pub enum RailError {
    /// Name (or run id) lookup found no matching record.
    #[error("{kind} not found: {name}")]
    NotFound { kind: Entity, name: String },

    /// A run with this name already exists in the project.
    #[error("run name already used: {0}")]
    DuplicateName(String),

    /// The service answered with an `{"error": ...}` envelope.
    #[error("api error: {0}")]
    Api(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response payload did not match the expected record shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RailError {
    pub(crate) fn not_found(kind: Entity, name: impl Into<String>) -> Self {
        RailError::NotFound {
            kind,
            name: name.into(),
        }
    }
}
