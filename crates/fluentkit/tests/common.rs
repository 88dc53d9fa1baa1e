#![allow(missing_docs, dead_code)]

/// Routes the crate's `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
