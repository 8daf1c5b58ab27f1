//! Request tagging types
//!
//! Every outbound call carries a CRUD kind and a resource class. Both are
//! echoed back verbatim in the result envelope so the host's response handler
//! can route the outcome without tracking in-flight calls itself.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

//-----------------------------------------------------------------------------
// Request Kind
//-----------------------------------------------------------------------------

/// The CRUD operation type associated with a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Fetch a single resource by id
    Get,
    /// Fetch the full collection
    GetAll,
    /// Update an existing resource
    Put,
    /// Create a new resource
    Post,
    /// Delete a resource by id
    Delete,
}

impl RequestKind {
    /// Wire label for the kind, matching the console's request constants.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Get => "RequestGet",
            RequestKind::GetAll => "RequestGetAll",
            RequestKind::Put => "RequestPut",
            RequestKind::Post => "RequestPost",
            RequestKind::Delete => "RequestDelete",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//-----------------------------------------------------------------------------
// Resource Class
//-----------------------------------------------------------------------------

/// Logical category of backend entity used to tag and route a request's
/// result.
///
/// The set is open by design: a class the library does not know about is
/// carried in `Other` and passed through unchanged, never rejected. Hosts can
/// route results for collections this crate has no typed support for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceClass {
    /// Storage shares (file/SMB/FTP/TUS mounts)
    Storage,
    /// News agency feed configurations
    Agency,
    /// Category taxonomy entries
    Category,
    /// Editorial/NRCS integrations
    EditorApp,
    /// Any class string this library does not recognize
    Other(String),
}

impl ResourceClass {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceClass::Storage => "Storage",
            ResourceClass::Agency => "Agency",
            ResourceClass::Category => "Category",
            ResourceClass::EditorApp => "EditorApp",
            ResourceClass::Other(name) => name,
        }
    }
}

impl From<&str> for ResourceClass {
    fn from(name: &str) -> Self {
        match name {
            "Storage" => ResourceClass::Storage,
            "Agency" => ResourceClass::Agency,
            "Category" => ResourceClass::Category,
            "EditorApp" => ResourceClass::EditorApp,
            other => ResourceClass::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResourceClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ResourceClass::from(name.as_str()))
    }
}

//-----------------------------------------------------------------------------
// Request Descriptor
//-----------------------------------------------------------------------------

/// Transient tag created immediately before a network call.
///
/// A descriptor lives only for the duration of its call and is consumed when
/// the result envelope is built. The `context` value is caller-owned and
/// opaque: the dispatch layer never inspects or mutates it, only copies it
/// into the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub kind: RequestKind,
    pub resource_class: ResourceClass,
    pub context: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(
        kind: RequestKind,
        resource_class: ResourceClass,
        context: Option<Value>,
    ) -> Self {
        Self {
            kind,
            resource_class,
            context,
        }
    }
}
