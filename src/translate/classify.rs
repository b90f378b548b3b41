use std::collections::HashMap;

use roxmltree::{Document, Node, NodeId};

use super::trimmed_text;

/// Role of one XML element in the graph translation. A small structural
/// vocabulary is matched by tag name; everything else is classified from the
/// element's shape (scalar text leaf, entity with scalar children, pure
/// nesting, or noise).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeClass {
    RelationshipList,
    Relationship,
    RelatedTo,
    RelationshipData,
    RelationshipKey,
    RelationshipValue,
    ModelElement,
    NamedQueryElement,
    Attribute,
    Vertex,
    Container,
    Ignored,
}

impl NodeClass {
    /// True for every class that produces an add-vertex operation.
    pub fn is_vertex(self) -> bool {
        matches!(
            self,
            NodeClass::Vertex | NodeClass::ModelElement | NodeClass::NamedQueryElement
        )
    }

    /// The two element-template roles have no stable natural key and get a
    /// content-hash identifier property.
    pub fn needs_synthesized_id(self) -> bool {
        matches!(self, NodeClass::ModelElement | NodeClass::NamedQueryElement)
    }
}

/// Memoized classification for a whole document, built in a single
/// bottom-up pass so each node is classified exactly once. Classifying
/// parents needs the classes of their children (an entity is an element with
/// at least one scalar-attribute child), so children go first.
pub struct ClassTable {
    classes: HashMap<NodeId, NodeClass>,
}

impl ClassTable {
    pub fn build(doc: &Document) -> Self {
        let mut classes = HashMap::new();
        let nodes: Vec<Node> = doc.root().descendants().collect();
        // Reverse pre-order puts every child before its parent.
        for node in nodes.into_iter().rev() {
            let class = classify(node, &classes);
            classes.insert(node.id(), class);
        }
        Self { classes }
    }

    pub fn class(&self, node: Node) -> NodeClass {
        self.classes
            .get(&node.id())
            .copied()
            .unwrap_or(NodeClass::Ignored)
    }
}

fn classify(node: Node, classes: &HashMap<NodeId, NodeClass>) -> NodeClass {
    if !node.is_element() {
        return NodeClass::Ignored;
    }
    let tag = node.tag_name().name().trim();
    if let Some(role) = structural_role(tag) {
        return role;
    }

    if !node.children().any(|c| c.is_element()) {
        if trimmed_text(node).is_empty() {
            return NodeClass::Ignored;
        }
        return NodeClass::Attribute;
    }

    let has_scalar_child = node
        .children()
        .filter(Node::is_element)
        .any(|c| classes.get(&c.id()) == Some(&NodeClass::Attribute));
    if has_scalar_child {
        NodeClass::Vertex
    } else {
        NodeClass::Container
    }
}

fn structural_role(tag: &str) -> Option<NodeClass> {
    const ROLES: [(&str, NodeClass); 8] = [
        ("relationship-list", NodeClass::RelationshipList),
        ("relationship", NodeClass::Relationship),
        ("related-to", NodeClass::RelatedTo),
        ("relationship-data", NodeClass::RelationshipData),
        ("relationship-key", NodeClass::RelationshipKey),
        ("relationship-value", NodeClass::RelationshipValue),
        ("model-element", NodeClass::ModelElement),
        ("named-query-element", NodeClass::NamedQueryElement),
    ];
    ROLES
        .iter()
        .find(|(name, _)| tag.eq_ignore_ascii_case(name))
        .map(|(_, class)| *class)
}

#[cfg(test)]
#[path = "../tests/translate/classify_tests.rs"]
mod tests;
