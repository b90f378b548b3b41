pub mod artifact;
pub mod catalog;
pub mod distribute;
pub mod graph;
pub mod inventory;
pub mod translate;
