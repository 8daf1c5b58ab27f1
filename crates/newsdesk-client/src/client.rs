//! Console client
//!
//! [`ConsoleClient`] owns the transport, the base URL, and the injected
//! response handler, and hands out the per-resource call-sites. Every call
//! funnels through [`ConsoleClient::call`]: build a dispatcher, issue the
//! request, settle the dispatcher with whatever came back. Calls return
//! nothing — the handler invocation is the entire output.

use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use newsdesk_types::{RequestKind, ResourceClass};

use crate::config::ClientConfig;
use crate::dispatch::{RequestDispatcher, ResponseHandler};
use crate::resources::{
    AgenciesClient, CategoriesClient, NrcsClient, SharesClient,
};
use crate::transport::{HttpMethod, HttpTransport, Transport};

/// Client for the console's configuration collections.
pub struct ConsoleClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    handler: Arc<dyn ResponseHandler>,
}

impl ConsoleClient {
    /// Build a client over the production HTTP transport.
    pub fn new(config: &ClientConfig, handler: Arc<dyn ResponseHandler>) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config)?);
        Ok(Self::with_transport(&config.base_url, transport, handler))
    }

    /// Build a client over an arbitrary transport. This is the seam tests
    /// use to script outcomes without a live backend.
    pub fn with_transport(
        base_url: &str,
        transport: Arc<dyn Transport>,
        handler: Arc<dyn ResponseHandler>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            handler,
        }
    }

    pub fn shares(&self) -> SharesClient<'_> {
        SharesClient { inner: self }
    }

    pub fn agencies(&self) -> AgenciesClient<'_> {
        AgenciesClient { inner: self }
    }

    pub fn categories(&self) -> CategoriesClient<'_> {
        CategoriesClient { inner: self }
    }

    pub fn nrcs(&self) -> NrcsClient<'_> {
        NrcsClient { inner: self }
    }

    /// Issue one tagged request against a backend path.
    ///
    /// Public so hosts can reach collections this crate has no typed
    /// call-site for; the class tag is passed through verbatim either way.
    pub async fn call(
        &self,
        kind: RequestKind,
        resource_class: ResourceClass,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        context: Option<Value>,
    ) {
        let url = format!("{}{}", self.base_url, path);
        debug!(%kind, class = %resource_class, %method, %url, "issuing console request");

        let dispatcher =
            RequestDispatcher::new(kind, resource_class, context, self.handler.clone());
        let result = self.transport.send(method, &url, body.as_ref()).await;
        dispatcher.settle(result);
    }
}
