//! trellis-graph — Neo4j access layer for the Trellis API.
//!
//! All Cypher lives in this crate. Label and relationship-type names are
//! spliced into statement text only through the registry witnesses from
//! trellis-core; ids and property maps are always bound as parameters.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod records;
pub mod schema;

pub use client::{GraphClient, GraphConfig, GraphError};
