use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ids::vertex_id;
use super::vertex::{Edge, EdgeOp, OpKind, Vertex, VertexOp};

/// Ordered collection of graph mutation operations for one atomic
/// submission. Operation order is emission order; stores apply sequentially
/// and resolve `$id` references left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPayload {
    pub vertices: Vec<VertexOp>,
    pub edges: Vec<EdgeOp>,
}

impl BulkPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex operation and returns its content-derived id.
    pub fn push_vertex(&mut self, operation: OpKind, vertex: Vertex) -> String {
        let id = vertex_id(&vertex);
        self.vertices.push(VertexOp {
            operation,
            id: id.clone(),
            vertex,
        });
        id
    }

    /// Appends an edge addition between two vertex references and returns
    /// the edge operation id (`e1`, `e2`, ... in emission order).
    pub fn push_edge(&mut self, source: String, target: String) -> String {
        let id = format!("e{}", self.edges.len() + 1);
        self.edges.push(EdgeOp {
            operation: OpKind::Add,
            id: id.clone(),
            edge: Edge { source, target },
        });
        id
    }

    pub fn add_vertex_count(&self) -> usize {
        self.vertices
            .iter()
            .filter(|op| op.operation == OpKind::Add)
            .count()
    }

    pub fn exists_vertex_count(&self) -> usize {
        self.vertices
            .iter()
            .filter(|op| op.operation == OpKind::Exists)
            .count()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serialize bulk payload")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse bulk payload")
    }
}
