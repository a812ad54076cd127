//! Document encoders

use crate::utils::error::{GatewayError, Result};
use bytes::Bytes;
use serde::Serialize;

/// Converts a document into its wire representation
///
/// Encoding is pure: no IO and no shared state, so a failure means the
/// document itself can't be represented.
pub trait Encoder<D: ?Sized>: Send + Sync {
    fn encode(&self, document: &D) -> Result<Bytes>;
}

/// Encodes any `Serialize` document as compact JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl<D: Serialize + ?Sized> Encoder<D> for JsonEncoder {
    fn encode(&self, document: &D) -> Result<Bytes> {
        serde_json::to_vec(document)
            .map(Bytes::from)
            .map_err(|e| GatewayError::encoding(format!("Failed to encode document as JSON: {}", e)))
    }
}
