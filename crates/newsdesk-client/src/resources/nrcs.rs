//! Editorial/NRCS app calls (`/nrcs`)

use serde_json::{json, Value};

use newsdesk_types::{NrcsConfig, RequestKind, ResourceClass};

use crate::client::ConsoleClient;
use crate::transport::HttpMethod;

const COLLECTION: &str = "/nrcs";

/// Calls against the editorial integration collection.
pub struct NrcsClient<'a> {
    pub(crate) inner: &'a ConsoleClient,
}

impl NrcsClient<'_> {
    pub async fn fetch(&self, app_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Get,
                ResourceClass::EditorApp,
                HttpMethod::Get,
                &format!("{COLLECTION}/{app_id}"),
                None,
                context,
            )
            .await
    }

    pub async fn fetch_all(&self, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::GetAll,
                ResourceClass::EditorApp,
                HttpMethod::Get,
                COLLECTION,
                None,
                context,
            )
            .await
    }

    pub async fn create(&self, app: &NrcsConfig, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Post,
                ResourceClass::EditorApp,
                HttpMethod::Post,
                COLLECTION,
                Some(json!(app)),
                context,
            )
            .await
    }

    pub async fn update(&self, app_id: &str, app: &NrcsConfig, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Put,
                ResourceClass::EditorApp,
                HttpMethod::Put,
                &format!("{COLLECTION}/{app_id}"),
                Some(json!(app)),
                context,
            )
            .await
    }

    pub async fn delete(&self, app_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Delete,
                ResourceClass::EditorApp,
                HttpMethod::Delete,
                &format!("{COLLECTION}/{app_id}"),
                None,
                context,
            )
            .await
    }
}
