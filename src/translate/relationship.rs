use roxmltree::Node;
use tracing::warn;

use crate::graph::{BulkPayload, OpKind, Vertex, local_ref};

use super::classify::{ClassTable, NodeClass};
use super::{child_elements, trimmed_text};

/// Outcome of resolving one relationship element. Skips are non-fatal: one
/// malformed relationship must not discard an otherwise valid graph.
#[derive(Debug, PartialEq, Eq)]
pub enum RelationshipOutcome {
    Resolved,
    Skipped,
}

/// Resolves a relationship element into an exists-vertex operation for the
/// presumed-existing target plus an add-edge from the enclosing vertex.
///
/// The target type comes from the single related-to child; each
/// relationship-data child contributes a `<type>.<property>` key and a value,
/// applied to the target when the key's type matches the target type.
pub fn resolve(
    node: Node,
    source_id: &str,
    classes: &ClassTable,
    payload: &mut BulkPayload,
) -> RelationshipOutcome {
    let mut targets =
        child_elements(node).filter(|c| classes.class(*c) == NodeClass::RelatedTo);
    let target_node = match (targets.next(), targets.next()) {
        (Some(t), None) => t,
        (None, _) => {
            warn!("relationship without a related-to child, skipping");
            return RelationshipOutcome::Skipped;
        }
        (Some(_), Some(_)) => {
            warn!("relationship with multiple related-to children, skipping");
            return RelationshipOutcome::Skipped;
        }
    };

    let target_type = trimmed_text(target_node);
    if target_type.is_empty() {
        warn!("relationship with an empty related-to target, skipping");
        return RelationshipOutcome::Skipped;
    }
    let mut target = Vertex::new(target_type);

    for data in child_elements(node).filter(|c| classes.class(*c) == NodeClass::RelationshipData) {
        apply_relationship_data(data, &mut target, classes);
    }

    let target_id = payload.push_vertex(OpKind::Exists, target);
    payload.push_edge(local_ref(source_id), local_ref(&target_id));
    RelationshipOutcome::Resolved
}

fn apply_relationship_data(data: Node, target: &mut Vertex, classes: &ClassTable) {
    let mut keys =
        child_elements(data).filter(|c| classes.class(*c) == NodeClass::RelationshipKey);
    let mut values =
        child_elements(data).filter(|c| classes.class(*c) == NodeClass::RelationshipValue);

    let (key, value) = match (keys.next(), keys.next(), values.next(), values.next()) {
        (Some(k), None, Some(v), None) => (trimmed_text(k), trimmed_text(v)),
        _ => {
            warn!("relationship-data without exactly one key and one value, skipping pair");
            return;
        }
    };

    let Some((key_type, property)) = key.split_once('.') else {
        warn!(key, "relationship key is not a dotted type.property pair, skipping pair");
        return;
    };

    if key_type.eq_ignore_ascii_case(&target.node_type) {
        target.set_property(property, value);
    }
}
