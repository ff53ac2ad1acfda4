//! Startup schema management: one-shot reset and type discovery.

use std::collections::BTreeSet;

use neo4rs::query;

use trellis_core::TypeRegistry;

use crate::client::{GraphClient, GraphError};

/// Wipe the database and replay the seed script.
///
/// The script is submitted as a single statement, whatever its size.
/// Destructive: everything currently in the database is detach-deleted
/// first. Intended for disposable development databases only.
pub async fn reset_database(client: &GraphClient, script: &str) -> Result<(), GraphError> {
    client.run(query("MATCH (n) DETACH DELETE n")).await?;
    client.run(query(script)).await?;
    tracing::info!("database reset from seed script");
    Ok(())
}

/// Query the distinct label and relationship-type sets currently in the
/// database and freeze them into a registry.
pub async fn discover_types(client: &GraphClient) -> Result<TypeRegistry, GraphError> {
    let mut node_types = BTreeSet::new();
    let rows = client
        .query_rows(query("MATCH (n) RETURN DISTINCT labels(n) AS labels"))
        .await?;
    for row in rows {
        // One label list per distinct combination; flatten them all.
        let labels: Vec<String> = row.get("labels").map_err(|e| {
            GraphError::Serialization(format!("failed to read labels column: {e}"))
        })?;
        node_types.extend(labels);
    }

    let mut rel_types = BTreeSet::new();
    let rows = client
        .query_rows(query("MATCH ()-[r]->() RETURN DISTINCT type(r) AS rel_type"))
        .await?;
    for row in rows {
        let rel_type: String = row.get("rel_type").map_err(|e| {
            GraphError::Serialization(format!("failed to read rel_type column: {e}"))
        })?;
        rel_types.insert(rel_type);
    }

    tracing::info!(
        node_types = node_types.len(),
        rel_types = rel_types.len(),
        "discovered graph schema"
    );
    Ok(TypeRegistry::new(node_types, rel_types))
}
