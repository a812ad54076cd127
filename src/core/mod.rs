//! Core functionality for the gateway
//!
//! This module contains the admission control, the dispatch path and the
//! document model.

pub mod dispatch;
pub mod gateway;
pub mod models;
pub mod rate_limiter;

pub use dispatch::{DispatchChannel, Encoder, HttpTransport, JsonEncoder, Transport, TransportError};
pub use gateway::{CallState, DispatchResponse, GatewayStats, GatewayStatsSnapshot, RateLimitedGateway};
pub use rate_limiter::{Admission, AdmissionController, WindowSlot};
