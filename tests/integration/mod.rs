//! Integration tests for permission-checker
//!
//! These tests use only the public API and real token payloads.

pub mod checker_tests;
pub mod config_tests;
pub mod error_handling_tests;
