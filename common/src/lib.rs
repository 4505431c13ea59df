pub mod config;

/// Common utilities shared across the receipt points service
///
/// This crate provides shared functionality used by the `processing` library
/// and the `receipts` binary:
///
/// - Configuration loading
/// - Shared test utilities for HTTP-level tests

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{TestError, TestResult};
