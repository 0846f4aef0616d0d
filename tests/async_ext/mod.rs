//! Integration tests for async extensions.

mod log_fault_tests;
