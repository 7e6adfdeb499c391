// src/lib.rs

//! `depqueue` — dependency-aware task queue.
//!
//! Give it a batch of tasks, each carrying a unique id and an optional list
//! of ids it must come after, and it hands them back one at a time in an
//! order that respects every declared dependency. Cycles are rejected with a
//! diagnostic naming the two ids that close the loop.
//!
//! The queue computes an order; it never runs anything. An external
//! retry/execution engine implements [`DependencyTask`] on its task type,
//! submits a batch, then pulls tasks until `next_task` returns `None`:
//!
//! ```
//! use depqueue::{DependencyTaskQueue, DependencyTask, TaskParameters, TaskExtra};
//!
//! struct Job {
//!     parameters: Option<TaskParameters>,
//! }
//!
//! impl DependencyTask for Job {
//!     fn parameters(&self) -> Option<&TaskParameters> {
//!         self.parameters.as_ref()
//!     }
//! }
//!
//! let build = Job {
//!     parameters: Some(TaskParameters::new(TaskExtra::new("build"))),
//! };
//! let test = Job {
//!     parameters: Some(TaskParameters::new(TaskExtra::with_dependencies(
//!         "test",
//!         vec!["build".to_string()],
//!     ))),
//! };
//!
//! let mut queue = DependencyTaskQueue::new();
//! queue.submit_batch(vec![test, build]).unwrap();
//!
//! let first = queue.next_task().unwrap();
//! assert_eq!(first.parameters().unwrap().extra.as_ref().unwrap().id, "build");
//! ```
//!
//! One batch at a time: dependencies are fixed at submission, and the queue
//! must be drained and [`DependencyTaskQueue::reset`] before the next batch.

pub mod dag;
pub mod errors;
pub mod logging;
pub mod queue;
pub mod task;

pub use errors::{DepQueueError, Result};
pub use queue::DependencyTaskQueue;
pub use task::{DependencyTask, TaskExtra, TaskId, TaskParameters};
