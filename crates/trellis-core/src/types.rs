//! Response envelopes returned by the API.
//!
//! Entities are exposed as explicit records rather than bare property
//! maps: the database-assigned identifier sits beside the property map,
//! so a user property that happens to be named `element_id` is never
//! shadowed or overwritten.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Database-assigned identifier, usable in later requests.
    pub element_id: i64,
    /// The node's label when it carries exactly one, absent otherwise.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    pub labels: Vec<String>,
    pub properties: Map<String, Value>,
}

impl NodeRecord {
    /// Build a record from raw node data, annotating single-labeled
    /// nodes with their `type`.
    pub fn new(element_id: i64, labels: Vec<String>, properties: Map<String, Value>) -> Self {
        let node_type = match labels.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        };
        Self {
            element_id,
            node_type,
            labels,
            properties,
        }
    }
}

/// A relationship as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Database-assigned identifier, usable in later requests.
    pub element_id: i64,
    #[serde(rename = "type")]
    pub rel_type: String,
    /// Identifier of the relationship's start node.
    pub source: i64,
    /// Identifier of the relationship's end node.
    pub target: i64,
    pub properties: Map<String, Value>,
}

/// A relationship listed together with both endpoint nodes, as returned
/// by the between-two-types listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub source: NodeRecord,
    pub target: NodeRecord,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: Map<String, Value>,
}
