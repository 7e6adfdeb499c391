// src/dag/mod.rs

//! Dependency graph construction and topological ordering.
//!
//! - [`graph`] turns a batch's dependency lists into nodes and edges.
//! - [`sorter`] walks the graph depth-first, detecting cycles via the active
//!   ancestor path, and emits the linear task order.

pub mod graph;
pub mod sorter;

pub use graph::{DepGraph, Edge, TaskNode};
pub use sorter::TopologicalSorter;
