use super::*;

use crate::graph::Vertex;

#[test]
fn vertex_id_joins_type_and_values_in_insertion_order() {
    let mut vertex = Vertex::new("model-ver");
    vertex.set_property("model-version-id", "ba0a6bb7");
    vertex.set_property("model-name", "vSAMP12");
    vertex.set_property("model-version", "1.0");
    assert_eq!(vertex_id(&vertex), "model-ver|ba0a6bb7|vSAMP12|1.0");
}

#[test]
fn vertex_id_without_properties_is_the_type() {
    let vertex = Vertex::new("generic-vnf");
    assert_eq!(vertex_id(&vertex), "generic-vnf");
}

#[test]
fn identical_content_yields_identical_vertex_ids() {
    let mut a = Vertex::new("model");
    a.set_property("model-invariant-id", "abc");
    let mut b = Vertex::new("model");
    b.set_property("model-invariant-id", "abc");
    assert_eq!(vertex_id(&a), vertex_id(&b));
}

#[test]
fn content_set_id_is_order_independent() {
    let forward = content_set_id(["alpha", "beta", "gamma"]);
    let backward = content_set_id(["gamma", "alpha", "beta"]);
    assert_eq!(forward, backward);
}

#[test]
fn content_set_id_deduplicates_exact_matches() {
    let once = content_set_id(["alpha", "beta"]);
    let twice = content_set_id(["alpha", "beta", "alpha", "beta"]);
    assert_eq!(once, twice);
}

#[test]
fn content_set_id_changes_when_any_element_changes() {
    let base = content_set_id(["alpha", "beta"]);
    let changed = content_set_id(["alpha", "beta2"]);
    let extended = content_set_id(["alpha", "beta", "gamma"]);
    assert_ne!(base, changed);
    assert_ne!(base, extended);
}

#[test]
fn content_set_id_of_empty_set_is_stable() {
    assert_eq!(content_set_id(std::iter::empty::<&str>()), "0000000000000000");
}
