pub mod mocks;

// Re-export main utilities for use by test files
pub use mocks::CallLog;
