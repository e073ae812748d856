// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request transport for the TestRail API
//!
//! The [`Transport`] trait is the seam between the client logic and the
//! wire: one authenticated request, JSON in and JSON out. Production
//! traffic goes through [`HttpTransport`]; tests drive the client with
//! [`FakeTransport`].

mod fake;
mod http;

pub use fake::{FakeTransport, RecordedCall};
pub use http::HttpTransport;

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The API surface only ever needs these two verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Errors raised below the API envelope: the request never completed or
/// the body was not JSON.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// A single blocking request against the API root.
///
/// `endpoint` is the path below `?/api/v2/`, with any numeric id
/// interpolation already applied by the caller. `payload` is only read
/// for POST.
pub trait Transport {
    fn send(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, TransportError>;
}

/// Response envelope, decoded once at the request-primitive boundary.
///
/// Downstream resolution logic only ever sees the success payload;
/// an object carrying an `error` key becomes [`ApiResponse::Failure`]
/// with the service-supplied message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Success(Value),
    Failure(String),
}

impl ApiResponse {
    pub fn decode(value: Value) -> Self {
        if let Some(error) = value.get("error") {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return ApiResponse::Failure(message);
        }
        ApiResponse::Success(value)
    }
}
