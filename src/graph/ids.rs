use std::collections::BTreeSet;

use super::vertex::Vertex;

const ID_DELIMITER: &str = "|";

/// Synthesizes a vertex operation id from the vertex type and every property
/// value in insertion order. Two vertices with the same type and the same
/// property content always get the same id, so re-submitting a payload for an
/// unchanged entity is idempotent.
pub fn vertex_id(vertex: &Vertex) -> String {
    let mut parts = Vec::with_capacity(1 + vertex.properties.len());
    parts.push(vertex.node_type.as_str());
    parts.extend(vertex.properties.values().map(String::as_str));
    parts.join(ID_DELIMITER)
}

/// Order-independent hash over a set of text fragments: each unique fragment
/// contributes the first eight bytes of its blake3 digest as a little-endian
/// u64, combined with XOR. Rendered as 16 hex digits. Pinned here so the same
/// content yields the same identifier across runs and releases.
pub fn content_set_id<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    let unique: BTreeSet<&str> = texts.into_iter().collect();
    let mut acc = 0u64;
    for text in unique {
        let digest = blake3::hash(text.as_bytes());
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest.as_bytes()[..8]);
        acc ^= u64::from_le_bytes(word);
    }
    format!("{:016x}", acc)
}

#[cfg(test)]
#[path = "../tests/graph/ids_tests.rs"]
mod tests;
