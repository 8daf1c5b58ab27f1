//! News agency calls (`/agencies`)

use serde_json::{json, Value};

use newsdesk_types::{AgencyConfig, RequestKind, ResourceClass};

use crate::client::ConsoleClient;
use crate::transport::HttpMethod;

const COLLECTION: &str = "/agencies";

/// Calls against the agency feed collection.
pub struct AgenciesClient<'a> {
    pub(crate) inner: &'a ConsoleClient,
}

impl AgenciesClient<'_> {
    pub async fn fetch(&self, agency_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Get,
                ResourceClass::Agency,
                HttpMethod::Get,
                &format!("{COLLECTION}/{agency_id}"),
                None,
                context,
            )
            .await
    }

    pub async fn fetch_all(&self, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::GetAll,
                ResourceClass::Agency,
                HttpMethod::Get,
                COLLECTION,
                None,
                context,
            )
            .await
    }

    pub async fn create(&self, agency: &AgencyConfig, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Post,
                ResourceClass::Agency,
                HttpMethod::Post,
                COLLECTION,
                Some(json!(agency)),
                context,
            )
            .await
    }

    pub async fn update(&self, agency_id: &str, agency: &AgencyConfig, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Put,
                ResourceClass::Agency,
                HttpMethod::Put,
                &format!("{COLLECTION}/{agency_id}"),
                Some(json!(agency)),
                context,
            )
            .await
    }

    pub async fn delete(&self, agency_id: &str, context: Option<Value>) {
        self.inner
            .call(
                RequestKind::Delete,
                ResourceClass::Agency,
                HttpMethod::Delete,
                &format!("{COLLECTION}/{agency_id}"),
                None,
                context,
            )
            .await
    }
}
