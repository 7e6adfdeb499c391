// src/dag/graph.rs

use std::collections::HashMap;

use tracing::debug;

use crate::task::TaskId;

/// A single dependency relation: `from` must be ordered before `to`.
///
/// Transient; edges only exist while the graph is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: TaskId,
    pub to: TaskId,
}

/// A vertex in the dependency graph.
///
/// `afters` holds the ids of tasks that depend on this one, i.e. the targets
/// of this node's outgoing edges. If task B depends on task A, then B appears
/// in A's `afters`.
#[derive(Debug, Clone)]
pub struct TaskNode {
    pub id: TaskId,
    pub afters: Vec<TaskId>,
}

impl TaskNode {
    fn new(id: TaskId) -> Self {
        Self {
            id,
            afters: Vec::new(),
        }
    }
}

/// In-memory dependency graph keyed by task id.
///
/// Nodes are kept in a map for lookup plus a separate first-insertion-order
/// id list, so traversal over "all known nodes" is reproducible for the same
/// input sequence. Built once per batch and discarded after sorting.
#[derive(Debug, Default)]
pub struct DepGraph {
    nodes: HashMap<TaskId, TaskNode>,
    /// Ids in first-insertion order.
    order: Vec<TaskId>,
}

impl DepGraph {
    /// Build a graph from `(task id, dependency ids)` pairs in submission
    /// order.
    ///
    /// Every listed task gets a node even when it has no edges at all, so
    /// isolated tasks still show up in the sorted order. Dependency ids are
    /// assumed to be valid (the queue validates them beforehand).
    pub fn from_dependency_list(deps: &[(TaskId, Vec<TaskId>)]) -> Self {
        let mut graph = Self::default();

        // First pass: a node per submitted task, in submission order.
        for (id, _) in deps {
            graph.ensure_node(id);
        }

        // Second pass: one edge per declared dependency, dep -> task.
        for edge in Self::edges(deps) {
            debug!(from = %edge.from, to = %edge.to, "adding dependency edge");
            graph.ensure_node(&edge.from);
            graph.ensure_node(&edge.to);
            if let Some(node) = graph.nodes.get_mut(&edge.from) {
                node.afters.push(edge.to.clone());
            }
        }

        graph
    }

    /// Edges implied by the dependency list.
    ///
    /// For a task B with `dependencies = ["A"]` the edge is A -> B: the
    /// dependency must come first.
    fn edges(deps: &[(TaskId, Vec<TaskId>)]) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (task, dependencies) in deps {
            for dep in dependencies {
                edges.push(Edge {
                    from: dep.clone(),
                    to: task.clone(),
                });
            }
        }
        edges
    }

    fn ensure_node(&mut self, id: &str) {
        if !self.nodes.contains_key(id) {
            self.order.push(id.to_string());
            self.nodes.insert(id.to_string(), TaskNode::new(id.to_string()));
        }
    }

    /// Node ids in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Dependents of a node (targets of its outgoing edges).
    pub fn afters_of(&self, id: &str) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.afters.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
