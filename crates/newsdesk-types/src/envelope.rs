//! Result envelope
//!
//! The single output contract of the dispatch core: every issued request
//! produces exactly one envelope, handed to the host's response handler.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransportFailure;
use crate::request::{RequestDescriptor, RequestKind, ResourceClass};

//-----------------------------------------------------------------------------
// Outcome
//-----------------------------------------------------------------------------

/// Coarse result classification. There is deliberately nothing between
/// these two; see [`TransportFailure`] for what a failure carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failed,
}

//-----------------------------------------------------------------------------
// Result Envelope
//-----------------------------------------------------------------------------

/// Normalized result of one request, tagged with the originating call's
/// kind, resource class, and caller context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub outcome: Outcome,
    pub kind: RequestKind,
    pub resource_class: ResourceClass,

    /// Caller-supplied correlation value, echoed unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Response body. Present on success, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    /// Failure reason from the transport. Failure only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    /// Raw response body text, when the failed exchange produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response_text: Option<String>,
}

impl ResultEnvelope {
    /// Build a success envelope, consuming the originating descriptor.
    pub fn success(descriptor: RequestDescriptor, payload: Value) -> Self {
        Self {
            outcome: Outcome::Success,
            kind: descriptor.kind,
            resource_class: descriptor.resource_class,
            context: descriptor.context,
            payload: Some(payload),
            failure_reason: None,
            raw_response_text: None,
        }
    }

    /// Build a failure envelope, consuming the originating descriptor.
    pub fn failure(descriptor: RequestDescriptor, failure: TransportFailure) -> Self {
        Self {
            outcome: Outcome::Failed,
            kind: descriptor.kind,
            resource_class: descriptor.resource_class,
            context: descriptor.context,
            payload: None,
            failure_reason: Some(failure.reason),
            raw_response_text: failure.raw_response_text,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_copies_descriptor_fields() {
        let descriptor = RequestDescriptor::new(
            RequestKind::Post,
            ResourceClass::Category,
            Some(json!("row-42")),
        );
        let envelope =
            ResultEnvelope::success(descriptor, json!({"_id": "abc", "ok": true}));

        assert!(envelope.is_success());
        assert_eq!(envelope.kind, RequestKind::Post);
        assert_eq!(envelope.resource_class, ResourceClass::Category);
        assert_eq!(envelope.context, Some(json!("row-42")));
        assert_eq!(envelope.payload, Some(json!({"_id": "abc", "ok": true})));
        assert_eq!(envelope.failure_reason, None);
        assert_eq!(envelope.raw_response_text, None);
    }

    #[test]
    fn failure_envelope_has_no_payload() {
        let descriptor =
            RequestDescriptor::new(RequestKind::Get, ResourceClass::Storage, None);
        let envelope = ResultEnvelope::failure(
            descriptor,
            TransportFailure::with_body("Not Found", "{}"),
        );

        assert_eq!(envelope.outcome, Outcome::Failed);
        assert_eq!(envelope.payload, None);
        assert_eq!(envelope.context, None);
        assert_eq!(envelope.failure_reason.as_deref(), Some("Not Found"));
        assert_eq!(envelope.raw_response_text.as_deref(), Some("{}"));
    }

    #[test]
    fn outcome_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Outcome::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&Outcome::Failed).unwrap(), "\"failed\"");
    }
}
