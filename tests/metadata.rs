// tests/metadata.rs

use depqueue::{TaskExtra, TaskParameters};

#[test]
fn extra_deserializes_with_dependencies() {
    let extra: TaskExtra =
        serde_json::from_str(r#"{ "id": "deploy", "dependencies": ["build", "test"] }"#).unwrap();

    assert_eq!(extra.id, "deploy");
    assert_eq!(extra.dependencies, vec!["build", "test"]);
}

#[test]
fn missing_dependencies_defaults_to_empty() {
    let extra: TaskExtra = serde_json::from_str(r#"{ "id": "build" }"#).unwrap();
    assert_eq!(extra.id, "build");
    assert!(extra.dependencies.is_empty());
}

#[test]
fn parameters_tolerate_absent_extra() {
    let params: TaskParameters = serde_json::from_str("{}").unwrap();
    assert!(params.extra.is_none());
}

#[test]
fn extra_round_trips_through_json() {
    let extra = TaskExtra::with_dependencies("one", vec!["two".to_string()]);
    let json = serde_json::to_string(&extra).unwrap();
    let back: TaskExtra = serde_json::from_str(&json).unwrap();
    assert_eq!(back, extra);
}
