//! Mock transport and handler for testing
//!
//! [`MockTransport`] resolves each request from a scripted table keyed on
//! `(method, url)` instead of touching the network, and
//! [`RecordingHandler`] collects every envelope it is handed. Together they
//! let the dispatch path be exercised end to end without a backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use newsdesk_types::{ResultEnvelope, TransportFailure};

use crate::dispatch::ResponseHandler;
use crate::transport::{HttpMethod, Transport};

//-----------------------------------------------------------------------------
// Mock Transport
//-----------------------------------------------------------------------------

/// Transport that replays scripted outcomes. A request with no script
/// entry resolves to a failure naming the unmatched method and URL.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<(HttpMethod, String), Result<Value, TransportFailure>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a success payload for a method/URL pair.
    pub fn respond_ok(&self, method: HttpMethod, url: impl Into<String>, payload: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert((method, url.into()), Ok(payload));
    }

    /// Script a failure for a method/URL pair.
    pub fn respond_err(
        &self,
        method: HttpMethod,
        url: impl Into<String>,
        failure: TransportFailure,
    ) {
        self.responses
            .lock()
            .unwrap()
            .insert((method, url.into()), Err(failure));
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        _body: Option<&Value>,
    ) -> Result<Value, TransportFailure> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method, url.to_string()))
            .cloned()
            .unwrap_or_else(|| {
                Err(TransportFailure::new(format!(
                    "no scripted response for {method} {url}"
                )))
            })
    }
}

//-----------------------------------------------------------------------------
// Recording Handler
//-----------------------------------------------------------------------------

/// Response handler that stores every envelope in delivery order.
#[derive(Default)]
pub struct RecordingHandler {
    envelopes: Mutex<Vec<ResultEnvelope>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    pub fn envelopes(&self) -> Vec<ResultEnvelope> {
        self.envelopes.lock().unwrap().clone()
    }
}

impl ResponseHandler for RecordingHandler {
    fn handle(&self, envelope: ResultEnvelope) {
        self.envelopes.lock().unwrap().push(envelope);
    }
}
