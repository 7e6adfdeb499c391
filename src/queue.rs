// src/queue.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::dag::{DepGraph, TopologicalSorter};
use crate::errors::{DepQueueError, Result};
use crate::task::{DependencyTask, TaskId};

/// Dependency-aware task queue.
///
/// One batch of tasks at a time: [`submit_batch`](Self::submit_batch)
/// validates the batch, builds the dependency graph, sorts it topologically
/// and caches the resulting order. The caller then drains tasks one at a time
/// with [`next_task`](Self::next_task), each returned task having all of its
/// declared dependencies returned before it. The queue must be fully drained
/// and [`reset`](Self::reset) before the next batch is accepted.
///
/// Between calls the queue only holds task storage and the cached order; all
/// graph structures live for the duration of a single `submit_batch` call.
/// Instances are independent and share no state; all mutating operations take
/// `&mut self`, so access is serialized by construction.
#[derive(Debug)]
pub struct DependencyTaskQueue<T> {
    /// Tasks by id. Only cleared by `reset`, not by draining.
    tasks: HashMap<TaskId, T>,
    /// Sorted ids, consumed from the end: dependencies sit at lower indices
    /// than their dependents, so popping yields predecessors first.
    task_order: Vec<TaskId>,
}

impl<T> Default for DependencyTaskQueue<T> {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
            task_order: Vec::new(),
        }
    }
}

impl<T: DependencyTask> DependencyTaskQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            task_order: Vec::new(),
        }
    }

    /// Single-task submission is deliberately unsupported: a meaningful order
    /// needs the whole dependency graph at once.
    pub fn submit_single(&mut self, _task: T) -> Result<()> {
        Err(DepQueueError::UnsupportedOperation)
    }

    /// Submit a batch of tasks and compute their execution order.
    ///
    /// An empty batch is a no-op. Submitting onto a non-empty queue fails
    /// with [`DepQueueError::BatchConflict`]. Each task must carry
    /// `parameters.extra.id`; ids must be unique within the batch and every
    /// declared dependency must name a task in the batch.
    ///
    /// All validation and sorting happen before any state is stored, so on
    /// any error the queue is left exactly as it was and can be retried with
    /// a corrected batch.
    pub fn submit_batch(&mut self, tasks: Vec<T>) -> Result<()> {
        if tasks.is_empty() {
            return Ok(());
        }

        if !self.is_empty() {
            return Err(DepQueueError::BatchConflict);
        }

        let dependency_list = Self::validate_batch(&tasks)?;
        let order = Self::sort_batch(&dependency_list)?;

        // dependency_list ids line up with tasks by submission position.
        for (task, (id, _)) in tasks.into_iter().zip(&dependency_list) {
            self.tasks.insert(id.clone(), task);
        }
        self.task_order = order;

        info!(
            tasks = self.tasks.len(),
            "batch loaded; order computed"
        );
        Ok(())
    }

    /// `true` iff both task storage and the pending order are empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.task_order.is_empty()
    }

    /// Number of tasks currently stored (drained or not; storage is only
    /// cleared by `reset`).
    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    /// Pop the next task in dependency order.
    ///
    /// Returns `None` once the order is drained. The task stays in storage
    /// until `reset` is called.
    pub fn next_task(&mut self) -> Option<&T> {
        let next_id = self.task_order.pop()?;
        debug!(task = %next_id, remaining = self.task_order.len(), "serving next task");
        self.tasks.get(&next_id)
    }

    /// Clear storage and any pending order, returning the queue to its
    /// initial empty state.
    pub fn reset(&mut self) {
        self.task_order.clear();
        self.tasks.clear();
    }

    /// Check every task's metadata and extract `(id, dependencies)` pairs in
    /// submission order.
    ///
    /// Checks run in priority order per task: parameters before extra, extra
    /// before id. Duplicate ids and dependencies on ids outside the batch are
    /// rejected, so the sorter only ever sees ids it can resolve to a task.
    fn validate_batch(tasks: &[T]) -> Result<Vec<(TaskId, Vec<TaskId>)>> {
        let mut dependency_list: Vec<(TaskId, Vec<TaskId>)> = Vec::with_capacity(tasks.len());
        let mut seen: HashSet<TaskId> = HashSet::new();

        for task in tasks {
            let parameters = task.parameters().ok_or(DepQueueError::MissingParameters)?;
            let extra = parameters.extra.as_ref().ok_or(DepQueueError::MissingExtra)?;
            if extra.id.is_empty() {
                return Err(DepQueueError::MissingId);
            }
            if !seen.insert(extra.id.clone()) {
                return Err(DepQueueError::DuplicateId(extra.id.clone()));
            }
            dependency_list.push((extra.id.clone(), extra.dependencies.clone()));
        }

        for (task, dependencies) in &dependency_list {
            for dep in dependencies {
                if !seen.contains(dep) {
                    return Err(DepQueueError::UnknownDependency {
                        task: task.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }

        Ok(dependency_list)
    }

    /// Build the graph and run the topological sort. Graph and sorter are
    /// dropped here; only the order survives.
    fn sort_batch(dependency_list: &[(TaskId, Vec<TaskId>)]) -> Result<Vec<TaskId>> {
        let graph = DepGraph::from_dependency_list(dependency_list);
        TopologicalSorter::new(&graph).sort()
    }
}
