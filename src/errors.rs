// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepQueueError {
    #[error("single task submission not supported in a dependency queue; use submit_batch")]
    UnsupportedOperation,

    #[error("tasks can not be added to a non-empty queue; drain it or call reset() first")]
    BatchConflict,

    #[error("a task must provide the parameters option")]
    MissingParameters,

    #[error("a task must provide the parameters extra option")]
    MissingExtra,

    #[error("a dependency task must provide a unique id parameter for the task ID")]
    MissingId,

    #[error("duplicate task id '{0}' in batch")]
    DuplicateId(String),

    #[error("task '{task}' has unknown dependency '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("a cycle has been found: {after} is in {node}")]
    Cycle { after: String, node: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DepQueueError>;
