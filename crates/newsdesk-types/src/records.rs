//! Resource record types
//!
//! Typed request payloads for the four configuration collections the console
//! manages. Field names follow the backend's wire contract exactly; optional
//! fields are skipped when absent so create and partial-update bodies share
//! the same types. Response bodies stay untyped (`serde_json::Value`) at the
//! dispatch layer, so these records only need to serialize.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

//-----------------------------------------------------------------------------
// Storage Shares
//-----------------------------------------------------------------------------

/// One mount point of a storage share, keyed by protocol in
/// [`ShareConfig::paths`]. Which credential fields the backend requires
/// depends on the protocol (`ftp` wants all of them, `file` only `path`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePath {
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub path: String,
}

/// Storage share configuration (`/shares`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    pub share_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub share_type: String,
    /// Protocols this share is reachable over; must have a matching entry
    /// in `paths` for each.
    pub protocols: Vec<String>,
    pub paths: HashMap<String, SharePath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

//-----------------------------------------------------------------------------
// Agencies
//-----------------------------------------------------------------------------

/// Feed endpoint details nested under an agency's `config` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEndpoint {
    /// Feed type, e.g. `rss` or `rest_get`.
    #[serde(rename = "type")]
    pub feed_type: String,
    /// Payload format the feed serves, e.g. `xml` or `json`.
    pub data_format: String,
    pub url: String,
}

/// News agency configuration (`/agencies`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyConfig {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub config: FeedEndpoint,
}

//-----------------------------------------------------------------------------
// Categories
//-----------------------------------------------------------------------------

/// Category taxonomy entry (`/categories`). The backend owns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
}

//-----------------------------------------------------------------------------
// Editor / NRCS Apps
//-----------------------------------------------------------------------------

/// Editorial (NRCS) integration configuration (`/nrcs`). Credential keys
/// vary by delivery protocol, so they stay a free-form map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NrcsConfig {
    pub id: String,
    pub name: String,
    pub protocol: String,
    pub data_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<HashMap<String, String>>,
}

//-----------------------------------------------------------------------------
// Acknowledgments
//-----------------------------------------------------------------------------

/// Shape the backend uses to acknowledge a create or update. Provided as a
/// convenience for response handlers; the dispatch layer never parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(rename = "_id")]
    pub id: String,
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn share_config_serializes_to_backend_shape() {
        let mut paths = HashMap::new();
        paths.insert(
            "ftp".to_string(),
            SharePath {
                protocol: "ftp".to_string(),
                ip: Some("10.0.0.5".to_string()),
                port: Some(21),
                username: Some("ingest".to_string()),
                password: Some("secret".to_string()),
                path: "/incoming".to_string(),
            },
        );
        let share = ShareConfig {
            share_id: "ingest-01".to_string(),
            name: "Ingest".to_string(),
            share_type: "file".to_string(),
            protocols: vec!["ftp".to_string()],
            paths,
            state: None,
        };

        let value = serde_json::to_value(&share).unwrap();
        assert_eq!(value["share_id"], json!("ingest-01"));
        assert_eq!(value["type"], json!("file"));
        assert_eq!(value["paths"]["ftp"]["port"], json!(21));
        assert!(value.get("state").is_none());
    }

    #[test]
    fn agency_config_nests_feed_endpoint() {
        let agency = AgencyConfig {
            id: "reuters".to_string(),
            name: "Reuters".to_string(),
            description: Some("World news wire".to_string()),
            config: FeedEndpoint {
                feed_type: "rss".to_string(),
                data_format: "xml".to_string(),
                url: "https://feeds.example.com/world".to_string(),
            },
        };

        let value = serde_json::to_value(&agency).unwrap();
        assert_eq!(value["config"]["type"], json!("rss"));
        assert_eq!(value["config"]["data_format"], json!("xml"));
    }

    #[test]
    fn ack_reads_underscored_id() {
        let ack: Ack = serde_json::from_value(json!({"_id": "abc", "ok": true})).unwrap();
        assert_eq!(ack.id, "abc");
        assert!(ack.ok);
    }
}
