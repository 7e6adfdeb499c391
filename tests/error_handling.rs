// tests/error_handling.rs

use depqueue::{DepQueueError, DependencyTaskQueue};
use depqueue_test_utils::builders::{
    task_without_extra, task_without_id, task_without_parameters, TaskBuilder,
};
use depqueue_test_utils::drain_ids;

#[test]
fn missing_parameters_is_rejected() {
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![task_without_parameters()]);

    assert!(matches!(result, Err(DepQueueError::MissingParameters)));
    assert!(queue.is_empty());
}

#[test]
fn missing_extra_is_rejected() {
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![task_without_extra()]);

    assert!(matches!(result, Err(DepQueueError::MissingExtra)));
    assert!(queue.is_empty());
}

#[test]
fn missing_id_is_rejected() {
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![TaskBuilder::new("a").build(), task_without_id()]);

    assert!(matches!(result, Err(DepQueueError::MissingId)));
    assert!(queue.is_empty());
}

#[test]
fn parameters_are_checked_before_extra_and_id() {
    // A task with no parameters at all reports the parameters error even
    // though extra and id are missing too.
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![task_without_parameters()]);
    assert!(matches!(result, Err(DepQueueError::MissingParameters)));

    let result = queue.submit_batch(vec![task_without_extra()]);
    assert!(matches!(result, Err(DepQueueError::MissingExtra)));
}

#[test]
fn duplicate_id_is_rejected() {
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![
        TaskBuilder::new("dup").build(),
        TaskBuilder::new("dup").build(),
    ]);

    match result {
        Err(DepQueueError::DuplicateId(id)) => assert_eq!(id, "dup"),
        other => panic!("expected DuplicateId, got {other:?}"),
    }
    assert!(queue.is_empty());
}

#[test]
fn unknown_dependency_is_rejected() {
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![
        TaskBuilder::new("a").depends_on("missing").build(),
    ]);

    match result {
        Err(DepQueueError::UnknownDependency { task, dependency }) => {
            assert_eq!(task, "a");
            assert_eq!(dependency, "missing");
        }
        other => panic!("expected UnknownDependency, got {other:?}"),
    }
    assert!(queue.is_empty());
}

#[test]
fn two_task_cycle_is_rejected_with_both_ids() {
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![
        TaskBuilder::new("taskone").depends_on("tasktwo").build(),
        TaskBuilder::new("tasktwo").depends_on("taskone").build(),
    ]);

    match result {
        Err(DepQueueError::Cycle { after, node }) => {
            assert_ne!(after, node);
            for id in [&after, &node] {
                assert!(id == "taskone" || id == "tasktwo");
            }
            let err = DepQueueError::Cycle { after, node };
            let msg = err.to_string();
            assert!(msg.contains("a cycle has been found"));
            assert!(msg.contains("taskone"));
            assert!(msg.contains("tasktwo"));
        }
        other => panic!("expected Cycle, got {other:?}"),
    }
    assert!(queue.is_empty());
}

#[test]
fn self_dependency_is_a_cycle() {
    let mut queue = DependencyTaskQueue::new();
    let result = queue.submit_batch(vec![TaskBuilder::new("loop").depends_on("loop").build()]);

    match result {
        Err(DepQueueError::Cycle { after, node }) => {
            assert_eq!(after, "loop");
            assert_eq!(node, "loop");
        }
        other => panic!("expected Cycle, got {other:?}"),
    }
    assert!(queue.is_empty());
}

#[test]
fn submit_on_non_empty_queue_is_a_batch_conflict() {
    let mut queue = DependencyTaskQueue::new();
    queue
        .submit_batch(vec![
            TaskBuilder::new("first").build(),
            TaskBuilder::new("second").depends_on("first").build(),
        ])
        .unwrap();

    let result = queue.submit_batch(vec![TaskBuilder::new("late").build()]);
    assert!(matches!(result, Err(DepQueueError::BatchConflict)));

    // The conflict must not disturb the loaded batch.
    assert_eq!(queue.size(), 2);
    assert_eq!(drain_ids(&mut queue), vec!["first", "second"]);
}

#[test]
fn failed_submit_leaves_queue_reusable() {
    let mut queue = DependencyTaskQueue::new();

    let cycle = queue.submit_batch(vec![
        TaskBuilder::new("x").depends_on("y").build(),
        TaskBuilder::new("y").depends_on("x").build(),
    ]);
    assert!(cycle.is_err());
    assert!(queue.is_empty());

    // A corrected batch goes straight through.
    queue
        .submit_batch(vec![
            TaskBuilder::new("x").build(),
            TaskBuilder::new("y").depends_on("x").build(),
        ])
        .unwrap();
    assert_eq!(drain_ids(&mut queue), vec!["x", "y"]);
}
