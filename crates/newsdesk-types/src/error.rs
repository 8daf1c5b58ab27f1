//! Transport failure type
//!
//! The dispatch layer distinguishes exactly two outcomes. A failure carries
//! the transport's reason string and whatever raw body text was available,
//! with no finer classification (a 404, a 500, and a refused connection all
//! look the same here; the response handler decides what to do with them).

use thiserror::Error;

/// Transport-level failure surfaced in a failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct TransportFailure {
    /// Human-readable reason supplied by the transport (status line reason,
    /// connect error text, or decode error text).
    pub reason: String,

    /// Raw response body, when the transport received one.
    pub raw_response_text: Option<String>,
}

impl TransportFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            raw_response_text: None,
        }
    }

    pub fn with_body(reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            raw_response_text: Some(body.into()),
        }
    }
}
