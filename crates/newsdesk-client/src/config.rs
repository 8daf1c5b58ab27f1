//! Configuration for the console client

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the console backend, without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
    /// Transport-level request timeout. Expiry surfaces as an ordinary
    /// failure envelope, not as a distinct error class.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            user_agent: concat!("newsdesk-client/", env!("CARGO_PKG_VERSION"))
                .to_string(),
            timeout_secs: 30,
        }
    }
}
