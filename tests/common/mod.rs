//! Common test utilities for regdoc-gateway

pub mod fixtures;
pub mod transports;

pub use fixtures::DocumentFactory;
pub use transports::{DispatchRecord, RecordingTransport};
