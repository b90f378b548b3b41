use std::collections::BTreeSet;

use anyhow::{Context, Result};
use roxmltree::{Document, Node};
use tracing::warn;

use crate::graph::{BulkPayload, OpKind, Vertex, content_set_id, local_ref};

mod classify;
mod relationship;

pub use self::classify::{ClassTable, NodeClass};
pub use self::relationship::RelationshipOutcome;

/// Direct child elements of a vertex-classed element whose tag names match
/// one of these carry the version context folded into synthesized ids.
const VERSION_FIELDS: [&str; 2] = ["model-version-id", "named-query-uuid"];

/// Property name carrying the content-derived identifier on model-element
/// and named-query-element vertices, which have no stable natural key.
const NODE_ID_PROPERTY: &str = "node-id";

/// Translates a model or named-query XML document into the bulk payload wire
/// JSON. Fails on malformed XML; documents carrying a doctype declaration are
/// rejected outright.
pub fn translate(xml: &str) -> Result<String> {
    translate_document(xml)?.to_json()
}

pub fn translate_document(xml: &str) -> Result<BulkPayload> {
    let doc = Document::parse(xml).context("parse model xml")?;
    let classes = ClassTable::build(&doc);
    let mut payload = BulkPayload::new();
    visit(doc.root_element(), None, &classes, &mut payload);
    Ok(payload)
}

fn visit(node: Node, parent: Option<&str>, classes: &ClassTable, payload: &mut BulkPayload) {
    let class = classes.class(node);

    if class.is_vertex() {
        let vertex = build_vertex(node, class, classes);
        let id = payload.push_vertex(OpKind::Add, vertex);
        if let Some(parent_id) = parent {
            payload.push_edge(local_ref(&id), local_ref(parent_id));
        }
        for child in child_elements(node) {
            visit(child, Some(&id), classes, payload);
        }
        return;
    }

    if class == NodeClass::Relationship {
        if let Some(source_id) = parent {
            relationship::resolve(node, source_id, classes, payload);
        } else {
            warn!("relationship outside any vertex context, skipping");
        }
    }

    for child in child_elements(node) {
        visit(child, parent, classes, payload);
    }
}

fn build_vertex(node: Node, class: NodeClass, classes: &ClassTable) -> Vertex {
    let mut vertex = Vertex::new(node.tag_name().name());
    if class.needs_synthesized_id() {
        vertex.set_property(NODE_ID_PROPERTY, &synthesized_id(node, classes));
    }
    for child in child_elements(node) {
        if classes.class(child) == NodeClass::Attribute {
            vertex.set_property(child.tag_name().name(), trimmed_text(child));
        }
    }
    vertex
}

/// Content-derived identifier for elements that have no stable natural key:
/// a set hash over the trimmed text of every attribute, relationship-key and
/// relationship-value descendant, plus the version field of the nearest
/// enclosing vertex, so the id tracks content rather than document position.
fn synthesized_id(node: Node, classes: &ClassTable) -> String {
    let mut texts: BTreeSet<&str> = BTreeSet::new();

    let enclosing_vertex = node
        .ancestors()
        .skip(1)
        .find(|a| classes.class(*a).is_vertex());
    if let Some(ancestor) = enclosing_vertex {
        let version = child_elements(ancestor).find(|c| {
            let tag = c.tag_name().name();
            VERSION_FIELDS.iter().any(|f| tag.eq_ignore_ascii_case(f))
        });
        if let Some(version) = version {
            let text = trimmed_text(version);
            if !text.is_empty() {
                texts.insert(text);
            }
        }
    }

    for descendant in node.descendants().skip(1) {
        if !descendant.is_element() {
            continue;
        }
        if matches!(
            classes.class(descendant),
            NodeClass::Attribute | NodeClass::RelationshipKey | NodeClass::RelationshipValue
        ) {
            texts.insert(trimmed_text(descendant));
        }
    }

    content_set_id(texts)
}

pub(crate) fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

pub(crate) fn trimmed_text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().map(str::trim).unwrap_or("")
}
