//! Newsdesk Types: shared vocabulary for the console API client.
//!
//! This crate defines the types that cross the dispatch boundary:
//!
//! * **Request tagging**: the CRUD kind and resource class attached to every
//!   outbound call (`request`)
//! * **Result envelope**: the normalized success/failure record delivered to
//!   the host's response handler (`envelope`)
//! * **Resource records**: typed request payloads for the backend's share,
//!   agency, category, and NRCS collections (`records`)
//! * **Failure type**: the coarse transport-level failure carried into
//!   failure envelopes (`error`)

//-----------------------------------------------------------------------------
// Module Structure
//-----------------------------------------------------------------------------

pub mod envelope;
pub mod error;
pub mod records;
pub mod request;

//-----------------------------------------------------------------------------
// Public Exports
//-----------------------------------------------------------------------------

pub use envelope::{Outcome, ResultEnvelope};
pub use error::TransportFailure;
pub use records::{
    Ack, AgencyConfig, CategoryRecord, FeedEndpoint, NrcsConfig, ShareConfig,
    SharePath,
};
pub use request::{RequestDescriptor, RequestKind, ResourceClass};
