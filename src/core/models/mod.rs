//! Data models submitted through the gateway

pub mod document;
pub mod signature;

pub use document::{Description, Document, Product};
pub use signature::Signature;
