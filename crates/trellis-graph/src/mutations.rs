//! Write operations against the graph.
//!
//! Ids and property maps are bound parameters; label and relationship
//! type names come in as registry witnesses, already checked against the
//! discovered sets.

use neo4rs::query;
use serde_json::{Map, Value};

use trellis_core::{NodeRecord, NodeType, RelType, RelationshipRecord};

use crate::client::{GraphClient, GraphError};
use crate::records;

impl GraphClient {
    /// Create one node with the given label and properties.
    pub async fn create_node(
        &self,
        node_type: NodeType<'_>,
        properties: &Map<String, Value>,
    ) -> Result<Vec<NodeRecord>, GraphError> {
        let cypher = format!("CREATE (n:{node_type} $props) RETURN n");
        let q = query(&cypher).param("props", records::bolt_properties(properties));
        let rows = self.query_rows(q).await?;
        records::nodes_from_rows(&rows, "n")
    }

    /// Create a directed, typed relationship between two existing nodes.
    ///
    /// Returns an empty list when either endpoint id does not resolve.
    pub async fn create_relationship(
        &self,
        rel_type: RelType<'_>,
        source: i64,
        dest: i64,
        properties: &Map<String, Value>,
    ) -> Result<Vec<RelationshipRecord>, GraphError> {
        let cypher = format!(
            "MATCH (n), (m) WHERE id(n) = $source AND id(m) = $dest \
             CREATE (n)-[r:{rel_type} $props]->(m) RETURN r"
        );
        let q = query(&cypher)
            .param("source", source)
            .param("dest", dest)
            .param("props", records::bolt_properties(properties));
        let rows = self.query_rows(q).await?;
        records::relationships_from_rows(&rows, "r")
    }

    /// Merge the given properties onto an existing node.
    ///
    /// Keys not named in the map are left untouched; a null value
    /// removes its key.
    pub async fn update_node(
        &self,
        id: i64,
        properties: &Map<String, Value>,
    ) -> Result<Vec<NodeRecord>, GraphError> {
        let q = query("MATCH (n) WHERE id(n) = $id SET n += $props RETURN n")
            .param("id", id)
            .param("props", records::bolt_properties(properties));
        let rows = self.query_rows(q).await?;
        records::nodes_from_rows(&rows, "n")
    }

    /// Delete a node together with every relationship incident to it.
    pub async fn delete_node(&self, id: i64) -> Result<(), GraphError> {
        let q = query("MATCH (n) WHERE id(n) = $id DETACH DELETE n").param("id", id);
        self.run(q).await
    }

    /// Delete exactly one relationship.
    pub async fn delete_relationship(&self, id: i64) -> Result<(), GraphError> {
        let q = query("MATCH ()-[r]->() WHERE id(r) = $id DELETE r").param("id", id);
        self.run(q).await
    }
}
