//! Newsdesk Client: dispatch core and resource clients for the console
//! backend of a media ingestion/playout platform.
//!
//! The crate is the browser console's API layer reduced to its contract:
//! every call is tagged with a request kind and resource class, issued over
//! an async transport, and normalized into exactly one
//! [`ResultEnvelope`](newsdesk_types::ResultEnvelope) delivered to an
//! injected [`ResponseHandler`]. What the handler does with an envelope —
//! table rows, modals, anything — is the host's business.
//!
//! ## Module Organization
//!
//! * **Dispatch core**: per-call tagging and envelope delivery (`dispatch`)
//! * **Transport**: the network seam and its `reqwest` implementation
//!   (`transport`)
//! * **Resource clients**: shares, agencies, categories, NRCS apps
//!   (`resources`, via [`ConsoleClient`])
//! * **Mocking**: scripted transport and recording handler for tests
//!   (`mock`)

//-----------------------------------------------------------------------------
// Module Structure
//-----------------------------------------------------------------------------

pub mod client;
pub mod config;
pub mod dispatch;
pub mod mock;
pub mod resources;
pub mod transport;

//-----------------------------------------------------------------------------
// Public Exports
//-----------------------------------------------------------------------------

pub use client::ConsoleClient;
pub use config::ClientConfig;
pub use dispatch::{RequestDispatcher, ResponseHandler};
pub use resources::{AgenciesClient, CategoriesClient, NrcsClient, SharesClient};
pub use transport::{HttpMethod, HttpTransport, Transport};

// Re-export the shared vocabulary so hosts need only one dependency.
pub use newsdesk_types::{
    Ack, AgencyConfig, CategoryRecord, FeedEndpoint, NrcsConfig, Outcome,
    RequestDescriptor, RequestKind, ResourceClass, ResultEnvelope, ShareConfig,
    SharePath, TransportFailure,
};
