mod ids;
mod payload;
mod vertex;

pub use self::ids::{content_set_id, vertex_id};
pub use self::payload::BulkPayload;
pub use self::vertex::{Edge, EdgeOp, OpKind, Vertex, VertexOp, local_ref};
