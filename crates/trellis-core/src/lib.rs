//! trellis-core: shared vocabulary for the Trellis graph API.
//!
//! This crate provides the types shared between the graph layer and the
//! HTTP layer:
//! - Response envelopes (`NodeRecord`, `RelationshipRecord`, `Connection`)
//! - The `TypeRegistry` of node labels and relationship types discovered
//!   from the live database at startup, used to validate path parameters

pub mod registry;
pub mod types;

pub use registry::{NodeType, RelType, TypeRegistry};
pub use types::{Connection, NodeRecord, RelationshipRecord};
