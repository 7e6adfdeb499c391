// src/task.rs

//! Task metadata model and the trait seam towards the retry engine.
//!
//! The queue never looks inside a task beyond its [`TaskParameters`]: the
//! payload (whatever the retry engine actually executes) stays opaque.

use serde::{Deserialize, Serialize};

/// Task id type used throughout the crate.
pub type TaskId = String;

/// The `extra` section of a task's parameters.
///
/// `id` must be unique within a batch. `dependencies` lists the ids of tasks
/// that must be ordered before this one; an absent list means "no
/// dependencies".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskExtra {
    pub id: TaskId,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl TaskExtra {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(id: impl Into<TaskId>, dependencies: Vec<TaskId>) -> Self {
        Self {
            id: id.into(),
            dependencies,
        }
    }
}

/// Parameters record attached to a task.
///
/// `extra` is optional at the type level so that malformed tasks can be
/// represented and rejected with a precise error, rather than failing at
/// construction time in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskParameters {
    #[serde(default)]
    pub extra: Option<TaskExtra>,
}

impl TaskParameters {
    pub fn new(extra: TaskExtra) -> Self {
        Self { extra: Some(extra) }
    }
}

/// Trait implemented by anything the queue can order.
///
/// The retry engine's task type implements this to expose its metadata; the
/// queue stores tasks by value and hands them back in dependency order.
pub trait DependencyTask {
    /// Metadata record for this task, or `None` if the caller never attached
    /// one (which `submit_batch` rejects).
    fn parameters(&self) -> Option<&TaskParameters>;
}

impl<T: DependencyTask + ?Sized> DependencyTask for Box<T> {
    fn parameters(&self) -> Option<&TaskParameters> {
        (**self).parameters()
    }
}
