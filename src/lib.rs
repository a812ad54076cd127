//! # regdoc-gateway
//!
//! Client-side gateway that submits documents to a remote registration
//! service without exceeding a configured number of dispatches per time
//! window, no matter how many tasks share it.
//!
//! ## Features
//!
//! - **Admission control**: a fixed pool of permits bounds in-flight calls
//! - **Window spacing**: at most `capacity` dispatches per window, sliding or fixed-interval
//! - **Serialized dispatch**: one document on the wire at a time
//! - **Cancellation**: waits can be interrupted by a deadline or any future
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regdoc_gateway::{AdmissionController, HttpTransport, RateLimitedGateway, Signature};
//! use regdoc_gateway::config::{TransportConfig, WindowUnit, RateLimitConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let limiter = AdmissionController::new(&RateLimitConfig::per(WindowUnit::Minute, 2))?;
//!     let transport = HttpTransport::new(&TransportConfig::default())?;
//!     let gateway = Arc::new(RateLimitedGateway::new(limiter, transport));
//!
//!     let document = serde_json::json!({"doc_id": "1", "products": []});
//!     let signature = Signature::new("base64-signature")?;
//!
//!     let response = gateway.submit(&document, &signature).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::dispatch::{
    DispatchChannel, Encoder, HttpTransport, JsonEncoder, Transport, TransportError,
};
pub use core::gateway::{
    CallState, DispatchResponse, GatewayStats, GatewayStatsSnapshot, RateLimitedGateway,
};
pub use core::models::{Description, Document, Product, Signature};
pub use core::rate_limiter::AdmissionController;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("REGDOC_BUILD_TIME"),
            git_hash: env!("REGDOC_GIT_HASH"),
        }
    }
}

/// Build information stamped by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
