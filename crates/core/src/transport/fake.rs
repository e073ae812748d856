//! Fake transport with call recording for testing

use super::{Method, Transport, TransportError};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Recorded call to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub payload: Option<Value>,
}

/// Shared state for the fake transport
#[derive(Default)]
struct FakeState {
    responses: HashMap<String, VecDeque<Value>>,
    calls: Vec<RecordedCall>,
    // Configurable failure mode
    unreachable: bool,
}

/// Fake transport serving canned per-endpoint responses.
///
/// Responses queue per endpoint and are consumed in order, so repeated
/// listings of the same endpoint can be given distinct payloads.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned response for an endpoint.
    pub fn respond(&self, endpoint: &str, value: Value) {
        self.state
            .lock()
            .unwrap()
            .responses
            .entry(endpoint.to_string())
            .or_default()
            .push_back(value);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Make every subsequent request fail as a transport error.
    pub fn set_unreachable(&self) {
        self.state.lock().unwrap().unreachable = true;
    }
}

impl Transport for FakeTransport {
    fn send(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            payload: payload.cloned(),
        });

        if state.unreachable {
            return Err(TransportError::Unavailable(
                "connection refused".to_string(),
            ));
        }

        state
            .responses
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                TransportError::Unavailable(format!("no canned response for {}", endpoint))
            })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
