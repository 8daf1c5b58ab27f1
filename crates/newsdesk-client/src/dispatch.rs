//! Request dispatch core
//!
//! A [`RequestDispatcher`] wraps exactly one outbound call: it is built with
//! the call's kind, resource class, and caller context, and on completion
//! normalizes the outcome into a [`ResultEnvelope`] delivered to an injected
//! [`ResponseHandler`]. Delivery consumes the dispatcher, so one descriptor
//! can never produce two envelopes.
//!
//! The handler is a constructor argument rather than a global, so multiple
//! independent dispatchers can coexist and be tested in isolation.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use newsdesk_types::{
    RequestDescriptor, RequestKind, ResourceClass, ResultEnvelope,
    TransportFailure,
};

//-----------------------------------------------------------------------------
// Response Handler
//-----------------------------------------------------------------------------

/// The single collaborator the dispatch core exposes results to.
///
/// The handler receives every envelope, success and failure alike, and is
/// free to update whatever host state it likes. Implemented for any
/// `Fn(ResultEnvelope)` closure.
pub trait ResponseHandler: Send + Sync {
    fn handle(&self, envelope: ResultEnvelope);
}

impl<F> ResponseHandler for F
where
    F: Fn(ResultEnvelope) + Send + Sync,
{
    fn handle(&self, envelope: ResultEnvelope) {
        self(envelope)
    }
}

//-----------------------------------------------------------------------------
// Request Dispatcher
//-----------------------------------------------------------------------------

/// Tags one outbound call and routes its normalized result.
///
/// No validation is performed on the kind or class — an unrecognized
/// [`ResourceClass::Other`] is echoed back verbatim, which is what lets
/// hosts extend the resource set without touching this crate.
pub struct RequestDispatcher {
    descriptor: RequestDescriptor,
    handler: Arc<dyn ResponseHandler>,
}

impl RequestDispatcher {
    pub fn new(
        kind: RequestKind,
        resource_class: ResourceClass,
        context: Option<Value>,
        handler: Arc<dyn ResponseHandler>,
    ) -> Self {
        Self {
            descriptor: RequestDescriptor::new(kind, resource_class, context),
            handler,
        }
    }

    /// Deliver a success envelope carrying the response payload.
    pub fn on_success(self, payload: Value) {
        debug!(
            kind = %self.descriptor.kind,
            class = %self.descriptor.resource_class,
            "request succeeded"
        );
        self.handler
            .handle(ResultEnvelope::success(self.descriptor, payload));
    }

    /// Deliver a failure envelope carrying the transport's reason and any
    /// raw body text it captured.
    pub fn on_failure(self, failure: TransportFailure) {
        debug!(
            kind = %self.descriptor.kind,
            class = %self.descriptor.resource_class,
            reason = %failure.reason,
            "request failed"
        );
        self.handler
            .handle(ResultEnvelope::failure(self.descriptor, failure));
    }

    /// Route a transport result to the matching delivery path.
    pub fn settle(self, result: Result<Value, TransportFailure>) {
        match result {
            Ok(payload) => self.on_success(payload),
            Err(failure) => self.on_failure(failure),
        }
    }
}
