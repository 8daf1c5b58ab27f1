//! Transport seam
//!
//! The dispatch core talks to the network through the [`Transport`] trait so
//! tests can substitute a scripted implementation. The production transport
//! is a thin wrapper over `reqwest`: one request in, one JSON value or one
//! [`TransportFailure`] out. Outcome classification stays coarse here — a
//! connect error, a non-2xx status, and an undecodable body all become the
//! same failure shape, distinguished only by their reason text.

use std::fmt;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use newsdesk_types::TransportFailure;

use crate::config::ClientConfig;

//-----------------------------------------------------------------------------
// HTTP Method
//-----------------------------------------------------------------------------

/// The verbs the console backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

//-----------------------------------------------------------------------------
// Transport Trait
//-----------------------------------------------------------------------------

/// One outbound exchange against the backend.
///
/// Implementations must resolve each call to exactly one of the two
/// outcomes; the dispatch layer adds no retry, cancellation, or timeout of
/// its own on top of this.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, TransportFailure>;
}

//-----------------------------------------------------------------------------
// HTTP Transport
//-----------------------------------------------------------------------------

/// Production transport over a pooled `reqwest` client.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, TransportFailure> {
        let mut request = self.client.request(method.into(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| TransportFailure::new(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| TransportFailure::new(err.to_string()))?;

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(TransportFailure::with_body(reason, text));
        }

        // DELETE responses may come back with an empty body
        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|err| {
            TransportFailure::with_body(format!("undecodable response body: {err}"), text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_labels() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }
}
