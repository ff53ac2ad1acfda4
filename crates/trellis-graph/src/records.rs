//! Normalization of driver rows into response records, and conversion of
//! JSON request bodies into Bolt parameters.

use neo4rs::{
    BoltBoolean, BoltFloat, BoltInteger, BoltList, BoltMap, BoltNull, BoltString, BoltType, Node,
    Relation, Row,
};
use serde_json::{Map, Value};

use trellis_core::{Connection, NodeRecord, RelationshipRecord};

use crate::client::GraphError;

/// Convert a driver node into its response record.
pub fn node_record(node: &Node) -> Result<NodeRecord, GraphError> {
    let mut properties = Map::new();
    for key in node.keys() {
        let value: Value = node.get(key).map_err(|e| {
            GraphError::Serialization(format!("failed to read node property {key}: {e}"))
        })?;
        properties.insert(key.to_string(), value);
    }
    let labels = node.labels().iter().map(|l| l.to_string()).collect();
    Ok(NodeRecord::new(node.id(), labels, properties))
}

/// Convert a driver relationship into its response record.
pub fn relationship_record(rel: &Relation) -> Result<RelationshipRecord, GraphError> {
    let mut properties = Map::new();
    for key in rel.keys() {
        let value: Value = rel.get(key).map_err(|e| {
            GraphError::Serialization(format!("failed to read relationship property {key}: {e}"))
        })?;
        properties.insert(key.to_string(), value);
    }
    Ok(RelationshipRecord {
        element_id: rel.id(),
        rel_type: rel.typ().to_string(),
        source: rel.start_node_id(),
        target: rel.end_node_id(),
        properties,
    })
}

/// Collect the node found under `column` in every row.
pub fn nodes_from_rows(rows: &[Row], column: &str) -> Result<Vec<NodeRecord>, GraphError> {
    rows.iter()
        .map(|row| {
            let node: Node = row.get(column).map_err(|e| {
                GraphError::Serialization(format!("failed to read column {column}: {e}"))
            })?;
            node_record(&node)
        })
        .collect()
}

/// Collect the relationship found under `column` in every row.
pub fn relationships_from_rows(
    rows: &[Row],
    column: &str,
) -> Result<Vec<RelationshipRecord>, GraphError> {
    rows.iter()
        .map(|row| {
            let rel: Relation = row.get(column).map_err(|e| {
                GraphError::Serialization(format!("failed to read column {column}: {e}"))
            })?;
            relationship_record(&rel)
        })
        .collect()
}

/// Assemble a `n, r, m` row into a connection.
///
/// `source` is the node that matched the first label in the pattern; the
/// relationship itself may point either way.
pub fn connection_from_row(row: &Row) -> Result<Connection, GraphError> {
    let source: Node = row
        .get("n")
        .map_err(|e| GraphError::Serialization(format!("failed to read column n: {e}")))?;
    let rel: Relation = row
        .get("r")
        .map_err(|e| GraphError::Serialization(format!("failed to read column r: {e}")))?;
    let target: Node = row
        .get("m")
        .map_err(|e| GraphError::Serialization(format!("failed to read column m: {e}")))?;

    let relationship = relationship_record(&rel)?;
    Ok(Connection {
        source: node_record(&source)?,
        target: node_record(&target)?,
        rel_type: relationship.rel_type,
        properties: relationship.properties,
    })
}

/// Convert a JSON property map into a Bolt map parameter.
pub fn bolt_properties(properties: &Map<String, Value>) -> BoltType {
    let mut map = BoltMap::default();
    for (key, value) in properties {
        map.put(key.as_str().into(), bolt_value(value));
    }
    BoltType::Map(map)
}

/// Translate one JSON value into its Bolt counterpart.
///
/// Nulls pass through: stored as nothing on create, and removing their
/// key on a `+=` merge.
fn bolt_value(value: &Value) -> BoltType {
    match value {
        Value::Null => BoltType::Null(BoltNull {}),
        Value::Bool(b) => BoltType::Boolean(BoltBoolean::new(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BoltType::Integer(BoltInteger::new(i)),
            None => BoltType::Float(BoltFloat::new(n.as_f64().unwrap_or(f64::NAN))),
        },
        Value::String(s) => BoltType::String(BoltString::from(s.as_str())),
        Value::Array(items) => {
            let mut list = BoltList::default();
            for item in items {
                list.push(bolt_value(item));
            }
            BoltType::List(list)
        }
        Value::Object(map) => {
            let mut inner = BoltMap::default();
            for (key, val) in map {
                inner.put(key.as_str().into(), bolt_value(val));
            }
            BoltType::Map(inner)
        }
    }
}
