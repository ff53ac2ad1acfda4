//! Validation domain for node labels and relationship types.
//!
//! Cypher can bind property values and identifiers as parameters, but not
//! label or relationship-type names — those have to be spliced into the
//! statement text. The registry holds the names that actually exist in
//! the database, and its lookup methods hand out the only types the query
//! layer accepts for splicing.

use std::collections::BTreeSet;
use std::fmt;

/// The legal node-label and relationship-type sets, computed once from
/// the live database at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    node_types: BTreeSet<String>,
    rel_types: BTreeSet<String>,
}

/// A node label known to exist in the database at startup.
///
/// Obtainable only via [`TypeRegistry::node_type`], so any value of this
/// type is safe to interpolate into Cypher text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeType<'a>(&'a str);

/// A relationship type known to exist in the database at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelType<'a>(&'a str);

impl TypeRegistry {
    pub fn new(
        node_types: impl IntoIterator<Item = String>,
        rel_types: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            node_types: node_types.into_iter().collect(),
            rel_types: rel_types.into_iter().collect(),
        }
    }

    /// Look up a node label. Matching is exact and case-sensitive.
    pub fn node_type(&self, raw: &str) -> Option<NodeType<'_>> {
        self.node_types.get(raw).map(|s| NodeType(s))
    }

    /// Look up a relationship type. Matching is exact and case-sensitive.
    pub fn rel_type(&self, raw: &str) -> Option<RelType<'_>> {
        self.rel_types.get(raw).map(|s| RelType(s))
    }

    /// All known node labels, in lexicographic order.
    pub fn node_types(&self) -> impl Iterator<Item = &str> {
        self.node_types.iter().map(String::as_str)
    }

    /// All known relationship types, in lexicographic order.
    pub fn rel_types(&self) -> impl Iterator<Item = &str> {
        self.rel_types.iter().map(String::as_str)
    }
}

impl NodeType<'_> {
    pub fn as_str(&self) -> &str {
        self.0
    }
}

impl RelType<'_> {
    pub fn as_str(&self) -> &str {
        self.0
    }
}

impl fmt::Display for NodeType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for RelType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
