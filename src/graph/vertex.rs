use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A typed property bag destined for the graph inventory store. Property
/// insertion order is significant: synthesized identifiers are derived from
/// the values in that order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(rename = "type")]
    pub node_type: String,

    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

impl Vertex {
    pub fn new(node_type: &str) -> Self {
        Self {
            node_type: node_type.trim().to_string(),
            properties: IndexMap::new(),
        }
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}

/// A directed edge between two vertex references. A reference is either a
/// concrete store identifier or a `$`-prefixed id of a vertex operation in
/// the same bulk payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Payload-local reference to the vertex produced by the operation with the
/// given id.
pub fn local_ref(id: &str) -> String {
    format!("${}", id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Create the entity if it is absent.
    Add,
    /// Assert the entity already exists; never mutates the store.
    Exists,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexOp {
    pub operation: OpKind,
    pub id: String,
    pub vertex: Vertex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeOp {
    pub operation: OpKind,
    pub id: String,
    pub edge: Edge,
}
