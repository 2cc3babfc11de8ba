//! Graph-service node records.
//!
//! Only the fields this service relies on are typed; every other node property
//! is carried through untouched so clients see the full node.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project (`Container` node) in the graph service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Opaque external identifier.
    pub global_entity_id: String,
    /// Short human-readable project code.
    pub code: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// A `User` node in the graph service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Graph-internal node id, used to address updates.
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}
