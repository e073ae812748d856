// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Production transport over ureq

use super::{Method, Transport, TransportError};
use crate::config::Config;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use ureq::Agent;

/// Blocking HTTP transport with Basic authentication.
pub struct HttpTransport {
    agent: Agent,
    api_root: String,
    authorization: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Self {
        // Error envelopes arrive with 4xx statuses; keep those as
        // readable responses instead of status errors.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        let credentials = format!("{}:{}", config.username, config.password);
        HttpTransport {
            agent,
            api_root: config.api_root(),
            authorization: format!("Basic {}", STANDARD.encode(credentials)),
        }
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.api_root, endpoint);
        tracing::debug!(%method, endpoint, "api request");

        let mut response = match method {
            Method::Get => self
                .agent
                .get(url.as_str())
                .header("Authorization", self.authorization.as_str())
                .header("Content-Type", "application/json")
                .call()?,
            Method::Post => {
                let body = payload.cloned().unwrap_or(Value::Null);
                self.agent
                    .post(url.as_str())
                    .header("Authorization", self.authorization.as_str())
                    .send_json(&body)?
            }
        };

        let value: Value = response.body_mut().read_json()?;
        Ok(value)
    }
}
