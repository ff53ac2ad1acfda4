//! Request handlers: validate path inputs against the registry, run one
//! graph operation, return the normalized records.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Map, Value};

use trellis_core::{Connection, NodeRecord, RelationshipRecord};

use crate::error::ApiError;
use crate::routes::AppState;

/// GET /data — every node in the database.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<NodeRecord>>, ApiError> {
    Ok(Json(state.graph.list_all_nodes().await?))
}

/// GET /data/{type} — all nodes with the given label.
pub async fn list_by_type(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<NodeRecord>>, ApiError> {
    let node_type = state
        .registry
        .node_type(&raw)
        .ok_or_else(|| ApiError::UnknownNodeType { value: raw.clone() })?;
    Ok(Json(state.graph.list_nodes_of_type(node_type).await?))
}

/// GET /data/{source}/{dest} — relationships between two node types,
/// any direction, any relationship type.
pub async fn list_connections(
    State(state): State<AppState>,
    Path((source, dest)): Path<(String, String)>,
) -> Result<Json<Vec<Connection>>, ApiError> {
    let src = state
        .registry
        .node_type(&source)
        .ok_or_else(|| ApiError::UnknownNodeType {
            value: source.clone(),
        })?;
    let dst = state
        .registry
        .node_type(&dest)
        .ok_or_else(|| ApiError::UnknownNodeType { value: dest.clone() })?;
    Ok(Json(state.graph.connections_between(src, dst).await?))
}

/// POST /node/{type} — create one node with the body as its properties.
pub async fn create_node(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(properties): Json<Map<String, Value>>,
) -> Result<Json<Vec<NodeRecord>>, ApiError> {
    let node_type = state
        .registry
        .node_type(&raw)
        .ok_or_else(|| ApiError::UnknownNodeType { value: raw.clone() })?;
    Ok(Json(state.graph.create_node(node_type, &properties).await?))
}

/// POST /relationship/{source}/{type}/{dest} — create a directed
/// relationship between two existing nodes.
pub async fn create_relationship(
    State(state): State<AppState>,
    Path((source, raw, dest)): Path<(i64, String, i64)>,
    Json(properties): Json<Map<String, Value>>,
) -> Result<Json<Vec<RelationshipRecord>>, ApiError> {
    let rel_type = state
        .registry
        .rel_type(&raw)
        .ok_or_else(|| ApiError::UnknownRelType { value: raw.clone() })?;
    Ok(Json(
        state
            .graph
            .create_relationship(rel_type, source, dest, &properties)
            .await?,
    ))
}

/// DELETE /node/{id} — detach-delete: incident relationships go too.
pub async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if state.graph.get_node(id).await?.is_none() {
        return Err(ApiError::NodeNotFound { id });
    }
    state.graph.delete_node(id).await?;
    Ok(Json(json!({ "message": "Node deleted." })))
}

/// DELETE /relationship/{id} — delete exactly that relationship.
pub async fn delete_relationship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if state.graph.get_relationship(id).await?.is_none() {
        return Err(ApiError::RelationshipNotFound { id });
    }
    state.graph.delete_relationship(id).await?;
    Ok(Json(json!({ "message": "Relationship deleted." })))
}

/// POST /edit/node/{id} — merge the body onto the node's properties.
pub async fn edit_node(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(properties): Json<Map<String, Value>>,
) -> Result<Json<Vec<NodeRecord>>, ApiError> {
    if state.graph.get_node(id).await?.is_none() {
        return Err(ApiError::NodeNotFound { id });
    }
    Ok(Json(state.graph.update_node(id, &properties).await?))
}

/// GET /status — health plus the dataset shape and discovered domains.
pub async fn status(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let nodes = state.graph.count_nodes().await?;
    let relationships = state.graph.count_relationships().await?;
    Ok(Json(json!({
        "status": "healthy",
        "nodes": nodes,
        "relationships": relationships,
        "node_types": state.registry.node_types().collect::<Vec<_>>(),
        "relationship_types": state.registry.rel_types().collect::<Vec<_>>(),
    })))
}
