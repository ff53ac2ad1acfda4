//! Read queries against the graph.

use neo4rs::query;

use trellis_core::{Connection, NodeRecord, NodeType, RelationshipRecord};

use crate::client::{GraphClient, GraphError};
use crate::records;

impl GraphClient {
    /// List every node in the database.
    pub async fn list_all_nodes(&self) -> Result<Vec<NodeRecord>, GraphError> {
        let rows = self.query_rows(query("MATCH (n) RETURN n")).await?;
        records::nodes_from_rows(&rows, "n")
    }

    /// List all nodes carrying the given label.
    pub async fn list_nodes_of_type(
        &self,
        node_type: NodeType<'_>,
    ) -> Result<Vec<NodeRecord>, GraphError> {
        let cypher = format!("MATCH (n:{node_type}) RETURN n");
        let rows = self.query_rows(query(&cypher)).await?;
        records::nodes_from_rows(&rows, "n")
    }

    /// List every relationship between nodes of the two given labels, in
    /// either direction and of any type, together with both endpoints.
    pub async fn connections_between(
        &self,
        source: NodeType<'_>,
        dest: NodeType<'_>,
    ) -> Result<Vec<Connection>, GraphError> {
        let cypher = format!("MATCH (n:{source})-[r]-(m:{dest}) RETURN n, r, m");
        let rows = self.query_rows(query(&cypher)).await?;
        rows.iter().map(records::connection_from_row).collect()
    }

    /// Fetch a node by its database identifier.
    pub async fn get_node(&self, id: i64) -> Result<Option<NodeRecord>, GraphError> {
        let q = query("MATCH (n) WHERE id(n) = $id RETURN n").param("id", id);
        match self.query_one(q).await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("n").map_err(|e| {
                    GraphError::Serialization(format!("failed to read column n: {e}"))
                })?;
                Ok(Some(records::node_record(&node)?))
            }
            None => Ok(None),
        }
    }

    /// Fetch a relationship by its database identifier.
    pub async fn get_relationship(
        &self,
        id: i64,
    ) -> Result<Option<RelationshipRecord>, GraphError> {
        let q = query("MATCH ()-[r]->() WHERE id(r) = $id RETURN r").param("id", id);
        match self.query_one(q).await? {
            Some(row) => {
                let rel: neo4rs::Relation = row.get("r").map_err(|e| {
                    GraphError::Serialization(format!("failed to read column r: {e}"))
                })?;
                Ok(Some(records::relationship_record(&rel)?))
            }
            None => Ok(None),
        }
    }

    /// Count all nodes.
    pub async fn count_nodes(&self) -> Result<i64, GraphError> {
        match self
            .query_one(query("MATCH (n) RETURN count(n) AS cnt"))
            .await?
        {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }

    /// Count all relationships.
    pub async fn count_relationships(&self) -> Result<i64, GraphError> {
        match self
            .query_one(query("MATCH ()-[r]->() RETURN count(r) AS cnt"))
            .await?
        {
            Some(row) => Ok(row.get::<i64>("cnt").unwrap_or(0)),
            None => Ok(0),
        }
    }
}
