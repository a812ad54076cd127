//! The single outbound channel shared by every caller

use super::encoder::{Encoder, JsonEncoder};
use super::transport::{Transport, TransportError};
use crate::core::models::Signature;
use crate::utils::error::Result;
use bytes::Bytes;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, MutexGuard};

struct Endpoint<T, E> {
    transport: T,
    encoder: E,
}

/// Encoder and transport paired behind one lock
///
/// A caller must hold a [`ChannelLease`] to encode or send. Only one lease
/// exists at any instant, so request bodies from concurrent callers can never
/// interleave on the shared transport object.
pub struct DispatchChannel<T, E = JsonEncoder> {
    endpoint: Mutex<Endpoint<T, E>>,
    dispatches: AtomicU64,
}

impl<T: Transport> DispatchChannel<T> {
    pub fn json(transport: T) -> Self {
        Self::new(transport, JsonEncoder)
    }
}

impl<T, E> DispatchChannel<T, E> {
    pub fn new(transport: T, encoder: E) -> Self {
        Self {
            endpoint: Mutex::new(Endpoint { transport, encoder }),
            dispatches: AtomicU64::new(0),
        }
    }

    /// Wait for exclusive use of the channel
    pub async fn acquire(&self) -> ChannelLease<'_, T, E> {
        ChannelLease {
            endpoint: self.endpoint.lock().await,
            dispatches: &self.dispatches,
        }
    }

    /// Number of payloads handed to the transport so far
    pub fn dispatch_count(&self) -> u64 {
        self.dispatches.load(Ordering::Relaxed)
    }
}

/// Exclusive access to the channel; released on drop
pub struct ChannelLease<'a, T, E> {
    endpoint: MutexGuard<'a, Endpoint<T, E>>,
    dispatches: &'a AtomicU64,
}

impl<T: Transport, E> ChannelLease<'_, T, E> {
    pub fn encode<D>(&self, document: &D) -> Result<Bytes>
    where
        D: ?Sized,
        E: Encoder<D>,
    {
        self.endpoint.encoder.encode(document)
    }

    pub async fn send(
        &self,
        body: Bytes,
        signature: &Signature,
    ) -> std::result::Result<Bytes, TransportError> {
        self.dispatches.fetch_add(1, Ordering::Relaxed);
        self.endpoint.transport.send(body, signature).await
    }

    pub fn transport_name(&self) -> &str {
        self.endpoint.transport.name()
    }
}
