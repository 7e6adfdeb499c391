// src/dag/sorter.rs

use std::collections::HashSet;

use tracing::debug;

use crate::dag::graph::DepGraph;
use crate::errors::{DepQueueError, Result};
use crate::task::TaskId;

/// One frame of the iterative depth-first traversal: a node id plus the index
/// of the next `afters` entry to expand.
struct Frame {
    id: TaskId,
    next_after: usize,
}

/// Depth-first post-order topological sorter with ancestor-path cycle
/// detection.
///
/// Uses an explicit frame stack instead of native recursion so that a deep
/// dependency chain cannot overflow the call stack. The ancestor path is the
/// ordered list of ids currently being expanded; hitting an id that is
/// already on the path means the graph has a cycle.
pub struct TopologicalSorter<'g> {
    graph: &'g DepGraph,
    /// Nodes whose entire subtree has been (or is being) expanded.
    visited: HashSet<TaskId>,
    /// Active DFS path, innermost last, plus a membership set for O(1) cycle
    /// checks.
    path: Vec<TaskId>,
    on_path: HashSet<TaskId>,
}

impl<'g> TopologicalSorter<'g> {
    pub fn new(graph: &'g DepGraph) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            path: Vec::new(),
            on_path: HashSet::new(),
        }
    }

    /// Produce the full task order for the graph.
    ///
    /// A node is appended only after all of its dependents, so dependencies
    /// land at lower indices; consuming the result from the end yields
    /// "predecessor before dependent". Roots are taken in the graph's
    /// first-insertion order, which keeps the relative order of independent
    /// tasks stable across runs.
    pub fn sort(mut self) -> Result<Vec<TaskId>> {
        let mut order = Vec::with_capacity(self.graph.len());

        for id in self.graph.ids() {
            if !self.visited.contains(id) {
                self.visit(id, &mut order)?;
            }
        }

        debug!(tasks = order.len(), "topological sort complete");
        Ok(order)
    }

    /// Expand one root and everything reachable from it.
    fn visit(&mut self, root: &str, order: &mut Vec<TaskId>) -> Result<()> {
        self.push_frame(root.to_string());
        let mut stack = vec![Frame {
            id: root.to_string(),
            next_after: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let afters = self.graph.afters_of(&frame.id);

            if frame.next_after < afters.len() {
                let after = afters[frame.next_after].clone();
                frame.next_after += 1;

                if self.on_path.contains(&after) {
                    // after is an ancestor of the node currently being
                    // expanded: the dependency relation loops back on itself.
                    debug!(path = ?self.path, "cycle detected in dependency graph");
                    return Err(DepQueueError::Cycle {
                        after,
                        node: frame.id.clone(),
                    });
                }
                if !self.visited.contains(&after) {
                    self.push_frame(after.clone());
                    stack.push(Frame {
                        id: after,
                        next_after: 0,
                    });
                }
            } else {
                // All dependents expanded; post-order append.
                let done = stack.pop().map(|f| f.id);
                if let Some(id) = done {
                    self.pop_path(&id);
                    order.push(id);
                }
            }
        }

        Ok(())
    }

    fn push_frame(&mut self, id: TaskId) {
        self.visited.insert(id.clone());
        self.on_path.insert(id.clone());
        self.path.push(id);
    }

    fn pop_path(&mut self, id: &str) {
        self.on_path.remove(id);
        self.path.pop();
    }
}
