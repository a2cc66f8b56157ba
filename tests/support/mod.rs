#![allow(dead_code)]

pub mod fake_source;

pub use fake_source::{Call, FakeSource, GatedSource};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
