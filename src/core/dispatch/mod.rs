//! Outbound dispatch path
//!
//! The gateway talks to the remote service through two ports: an [`Encoder`]
//! that turns a document into bytes and a [`Transport`] that performs one
//! network exchange. Both live inside a single [`DispatchChannel`], which
//! admits one caller at a time.

mod channel;
mod encoder;
mod http;
mod transport;


pub use channel::{ChannelLease, DispatchChannel};
pub use encoder::{Encoder, JsonEncoder};
pub use http::HttpTransport;
pub use transport::{Transport, TransportError};
