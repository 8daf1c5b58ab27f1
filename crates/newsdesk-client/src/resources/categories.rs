//! Category taxonomy calls (`/categories`)

use serde_json::{json, Value};

use newsdesk_types::{CategoryRecord, RequestKind, ResourceClass};

use crate::client::ConsoleClient;
use crate::transport::HttpMethod;

const COLLECTION: &str = "/categories";

/// Calls against the category taxonomy collection.
pub struct CategoriesClient<'a> {
    pub(crate) inner: &'a ConsoleClient,
}

impl CategoriesClient<'_> {
    pub async fn fetch(&self, category_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Get,
                ResourceClass::Category,
                HttpMethod::Get,
                &format!("{COLLECTION}/{category_id}"),
                None,
                context,
            )
            .await
    }

    pub async fn fetch_all(&self, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::GetAll,
                ResourceClass::Category,
                HttpMethod::Get,
                COLLECTION,
                None,
                context,
            )
            .await
    }

    pub async fn create(&self, category: &CategoryRecord, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Post,
                ResourceClass::Category,
                HttpMethod::Post,
                COLLECTION,
                Some(json!(category)),
                context,
            )
            .await
    }

    pub async fn update(
        &self,
        category_id: &str,
        category: &CategoryRecord,
        context: Option<Value>,
    ) {
        self.inner
            .call(
                RequestKind::Put,
                ResourceClass::Category,
                HttpMethod::Put,
                &format!("{COLLECTION}/{category_id}"),
                Some(json!(category)),
                context,
            )
            .await
    }

    pub async fn delete(&self, category_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Delete,
                ResourceClass::Category,
                HttpMethod::Delete,
                &format!("{COLLECTION}/{category_id}"),
                None,
                context,
            )
            .await
    }
}
