//! Error handling for the gateway
//!
//! This module defines the error taxonomy shared by configuration, admission
//! control and dispatch.

mod helpers;
mod types;

pub use types::{GatewayError, Result};
