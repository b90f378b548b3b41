use super::*;

use roxmltree::Document;

fn class_of(doc: &Document, table: &ClassTable, tag: &str) -> NodeClass {
    let node = doc
        .root()
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
        .unwrap_or_else(|| panic!("no <{}> in fixture", tag));
    table.class(node)
}

#[test]
fn classifies_by_element_shape() {
    let doc = Document::parse(
        r#"<model>
            <model-invariant-id>abc</model-invariant-id>
            <model-vers>
                <model-ver>
                    <model-version-id>def</model-version-id>
                </model-ver>
            </model-vers>
            <empty-leaf></empty-leaf>
        </model>"#,
    )
    .unwrap();
    let table = ClassTable::build(&doc);

    assert_eq!(class_of(&doc, &table, "model-invariant-id"), NodeClass::Attribute);
    assert_eq!(class_of(&doc, &table, "model"), NodeClass::Vertex);
    assert_eq!(class_of(&doc, &table, "model-vers"), NodeClass::Container);
    assert_eq!(class_of(&doc, &table, "model-ver"), NodeClass::Vertex);
    assert_eq!(class_of(&doc, &table, "empty-leaf"), NodeClass::Ignored);
}

#[test]
fn structural_vocabulary_wins_over_shape() {
    let doc = Document::parse(
        r#"<wrapper>
            <relationship-list>
                <relationship>
                    <related-to>model</related-to>
                    <relationship-data>
                        <relationship-key>model.model-invariant-id</relationship-key>
                        <relationship-value>abc</relationship-value>
                    </relationship-data>
                </relationship>
            </relationship-list>
            <model-element>
                <cardinality>unbounded</cardinality>
            </model-element>
            <named-query-element>
                <property-limit-desc>all</property-limit-desc>
            </named-query-element>
        </wrapper>"#,
    )
    .unwrap();
    let table = ClassTable::build(&doc);

    assert_eq!(class_of(&doc, &table, "relationship-list"), NodeClass::RelationshipList);
    assert_eq!(class_of(&doc, &table, "relationship"), NodeClass::Relationship);
    assert_eq!(class_of(&doc, &table, "related-to"), NodeClass::RelatedTo);
    assert_eq!(class_of(&doc, &table, "relationship-data"), NodeClass::RelationshipData);
    assert_eq!(class_of(&doc, &table, "relationship-key"), NodeClass::RelationshipKey);
    assert_eq!(class_of(&doc, &table, "relationship-value"), NodeClass::RelationshipValue);
    // These two would classify as plain vertices by shape; the vocabulary
    // assigns them the synthesized-id roles instead.
    assert_eq!(class_of(&doc, &table, "model-element"), NodeClass::ModelElement);
    assert_eq!(class_of(&doc, &table, "named-query-element"), NodeClass::NamedQueryElement);
}

#[test]
fn vocabulary_match_is_case_insensitive() {
    let doc = Document::parse("<Relationship-List><x>1</x></Relationship-List>").unwrap();
    let table = ClassTable::build(&doc);
    assert_eq!(
        class_of(&doc, &table, "Relationship-List"),
        NodeClass::RelationshipList
    );
}

#[test]
fn whitespace_only_text_does_not_make_an_attribute() {
    let doc = Document::parse("<wrapper><blank>   </blank><real>x</real></wrapper>").unwrap();
    let table = ClassTable::build(&doc);
    assert_eq!(class_of(&doc, &table, "blank"), NodeClass::Ignored);
    assert_eq!(class_of(&doc, &table, "real"), NodeClass::Attribute);
    assert_eq!(class_of(&doc, &table, "wrapper"), NodeClass::Vertex);
}

#[test]
fn vertex_roles_are_flagged_consistently() {
    assert!(NodeClass::Vertex.is_vertex());
    assert!(NodeClass::ModelElement.is_vertex());
    assert!(NodeClass::NamedQueryElement.is_vertex());
    assert!(!NodeClass::Container.is_vertex());
    assert!(!NodeClass::Relationship.is_vertex());

    assert!(NodeClass::ModelElement.needs_synthesized_id());
    assert!(NodeClass::NamedQueryElement.needs_synthesized_id());
    assert!(!NodeClass::Vertex.needs_synthesized_id());
}
