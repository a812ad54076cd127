//! Opaque credential passed through to the transport

use crate::utils::error::{GatewayError, Result};
use std::fmt;

/// Signature or token authorizing a submission
///
/// The gateway never inspects the value beyond rejecting empty input. `Debug`
/// and `Display` redact it so it can't leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(GatewayError::invalid_request("Signature must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signature").field(&"[REDACTED]").finish()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl TryFrom<String> for Signature {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Signature {
    type Error = GatewayError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
