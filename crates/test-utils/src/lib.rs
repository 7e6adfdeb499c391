pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

use depqueue::{DependencyTask, DependencyTaskQueue};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Drain a loaded queue, recording the id of each task in the order it was
/// served. Stands in for the retry engine's consumption loop in tests.
pub fn drain_ids<T: DependencyTask>(queue: &mut DependencyTaskQueue<T>) -> Vec<String> {
    let mut served = Vec::new();
    while let Some(task) = queue.next_task() {
        let id = task
            .parameters()
            .and_then(|p| p.extra.as_ref())
            .map(|e| e.id.clone())
            .expect("queued task must carry an id");
        served.push(id);
    }
    served
}
