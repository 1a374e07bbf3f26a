pub mod hierarchy;

pub use hierarchy::{HierarchyGraph, sort_hierarchy};
