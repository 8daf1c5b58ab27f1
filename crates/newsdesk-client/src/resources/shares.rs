//! Storage share calls (`/shares`)

use serde_json::{json, Value};

use newsdesk_types::{RequestKind, ResourceClass, ShareConfig};

use crate::client::ConsoleClient;
use crate::transport::HttpMethod;

const COLLECTION: &str = "/shares";

/// Calls against the storage share collection.
pub struct SharesClient<'a> {
    pub(crate) inner: &'a ConsoleClient,
}

impl SharesClient<'_> {
    pub async fn fetch(&self, share_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Get,
                ResourceClass::Storage,
                HttpMethod::Get,
                &format!("{COLLECTION}/{share_id}"),
                None,
                context,
            )
            .await
    }

    pub async fn fetch_all(&self, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::GetAll,
                ResourceClass::Storage,
                HttpMethod::Get,
                COLLECTION,
                None,
                context,
            )
            .await
    }

    pub async fn create(&self, share: &ShareConfig, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Post,
                ResourceClass::Storage,
                HttpMethod::Post,
                COLLECTION,
                Some(json!(share)),
                context,
            )
            .await
    }

    pub async fn update(&self, share_id: &str, share: &ShareConfig, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Put,
                ResourceClass::Storage,
                HttpMethod::Put,
                &format!("{COLLECTION}/{share_id}"),
                Some(json!(share)),
                context,
            )
            .await
    }

    pub async fn delete(&self, share_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Delete,
                ResourceClass::Storage,
                HttpMethod::Delete,
                &format!("{COLLECTION}/{share_id}"),
                None,
                context,
            )
            .await
    }
}
