#![allow(dead_code)]

use depqueue::{DependencyTask, TaskExtra, TaskParameters};

/// Minimal task type for tests: a label payload plus the metadata record the
/// queue inspects. Malformed shapes (no parameters, no extra, empty id) are
/// representable so validation paths can be exercised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTask {
    pub label: String,
    pub parameters: Option<TaskParameters>,
}

impl DependencyTask for TestTask {
    fn parameters(&self) -> Option<&TaskParameters> {
        self.parameters.as_ref()
    }
}

/// Builder for `TestTask` to simplify test setup.
pub struct TaskBuilder {
    label: String,
    extra: TaskExtra,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            label: format!("task {id}"),
            extra: TaskExtra::new(id),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.extra.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> TestTask {
        TestTask {
            label: self.label,
            parameters: Some(TaskParameters::new(self.extra)),
        }
    }
}

/// Task with no parameters record at all.
pub fn task_without_parameters() -> TestTask {
    TestTask {
        label: "no parameters".to_string(),
        parameters: None,
    }
}

/// Task with parameters but no `extra` section.
pub fn task_without_extra() -> TestTask {
    TestTask {
        label: "no extra".to_string(),
        parameters: Some(TaskParameters::default()),
    }
}

/// Task whose `extra.id` is the empty string.
pub fn task_without_id() -> TestTask {
    TestTask {
        label: "no id".to_string(),
        parameters: Some(TaskParameters::new(TaskExtra::new(""))),
    }
}
