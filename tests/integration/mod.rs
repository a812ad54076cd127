//! Integration tests for regdoc-gateway
//!
//! These tests drive the public API end to end. Scenario tests run on a
//! paused tokio clock, so minute-long windows complete instantly.

pub mod config_tests;
pub mod error_handling_tests;
pub mod http_transport_tests;
