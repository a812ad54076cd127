//! Rate-limited submission gateway
//!
//! [`RateLimitedGateway`] is the public entry point. Each `submit` call walks
//! through the states of [`CallState`]: it waits for a permit, waits for the
//! dispatch window, then hands its encoded document to the shared
//! [`DispatchChannel`](crate::core::dispatch::DispatchChannel). Both waits can
//! be interrupted with [`RateLimitedGateway::submit_until`] or
//! [`RateLimitedGateway::submit_with_timeout`].

mod service;
mod stats;
mod types;


pub use service::RateLimitedGateway;
pub use stats::{GatewayStats, GatewayStatsSnapshot};
pub use types::{CallState, DispatchResponse};
