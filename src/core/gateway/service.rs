//! Gateway service

use super::stats::{CallOutcome, GatewayStats};
use super::types::{CallState, DispatchResponse};
use crate::config::Config;
use crate::core::dispatch::{DispatchChannel, Encoder, HttpTransport, JsonEncoder, Transport};
use crate::core::models::Signature;
use crate::core::rate_limiter::AdmissionController;
use crate::utils::error::{GatewayError, Result};
use std::future::{Future, pending};
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Submits documents to the remote service under a shared rate limit
///
/// Create one per remote service and share it behind an `Arc`; every method
/// takes `&self`. Each call holds one permit from admission until its
/// dispatch returns, and the dispatch window is consulted and updated under a
/// single lock, so concurrent callers can neither exceed the permit count nor
/// squeeze extra dispatches into a full window.
pub struct RateLimitedGateway<T, E = JsonEncoder> {
    limiter: AdmissionController,
    pub(super) channel: DispatchChannel<T, E>,
    stats: GatewayStats,
}

impl<T: Transport> RateLimitedGateway<T> {
    /// Gateway encoding documents as JSON
    pub fn new(limiter: AdmissionController, transport: T) -> Self {
        Self::with_encoder(limiter, transport, JsonEncoder)
    }
}

impl RateLimitedGateway<HttpTransport> {
    /// Build a gateway talking HTTP from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let limiter = AdmissionController::new(config.rate_limit())?;
        let transport = HttpTransport::new(config.transport())?;

        info!(endpoint = %transport.endpoint(), "Gateway initialized");
        Ok(Self::new(limiter, transport))
    }
}

impl<T: Transport, E> RateLimitedGateway<T, E> {
    pub fn with_encoder(limiter: AdmissionController, transport: T, encoder: E) -> Self {
        Self {
            limiter,
            channel: DispatchChannel::new(transport, encoder),
            stats: GatewayStats::default(),
        }
    }

    pub fn limiter(&self) -> &AdmissionController {
        &self.limiter
    }

    pub fn stats(&self) -> &GatewayStats {
        &self.stats
    }

    /// Documents handed to the transport so far
    pub fn dispatch_count(&self) -> u64 {
        self.channel.dispatch_count()
    }

    /// Submit a document, waiting as long as admission requires
    pub async fn submit<D>(&self, document: &D, signature: &Signature) -> Result<DispatchResponse>
    where
        D: ?Sized + Sync,
        E: Encoder<D>,
    {
        self.submit_until(document, signature, pending()).await
    }

    /// Submit a document, giving up if it has not been dispatched within `timeout`
    ///
    /// The deadline only covers the waits. Once the document reaches the
    /// transport, the call runs to completion.
    pub async fn submit_with_timeout<D>(
        &self,
        document: &D,
        signature: &Signature,
        timeout: Duration,
    ) -> Result<DispatchResponse>
    where
        D: ?Sized + Sync,
        E: Encoder<D>,
    {
        self.submit_until(document, signature, sleep(timeout)).await
    }

    /// Submit a document, interrupting any wait as soon as `cancel` completes
    ///
    /// An interrupted call fails with [`GatewayError::InterruptedWait`],
    /// returns its permit and leaves the dispatch window untouched.
    pub async fn submit_until<D, C>(
        &self,
        document: &D,
        signature: &Signature,
        cancel: C,
    ) -> Result<DispatchResponse>
    where
        D: ?Sized + Sync,
        E: Encoder<D>,
        C: Future<Output = ()> + Send,
    {
        let span = info_span!("submit", call_id = %Uuid::new_v4());

        async move {
            let outcome = self.stats.begin();
            debug!(state = %CallState::Idle, "Submission received");
            let result = self.run(document, signature, cancel).await;
            observe(outcome, &result);
            result
        }
        .instrument(span)
        .await
    }

    async fn run<D, C>(
        &self,
        document: &D,
        signature: &Signature,
        cancel: C,
    ) -> Result<DispatchResponse>
    where
        D: ?Sized + Sync,
        E: Encoder<D>,
        C: Future<Output = ()> + Send,
    {
        let entered_at = Instant::now();
        tokio::pin!(cancel);

        let admission =
            interruptible(CallState::AwaitingPermit, self.limiter.acquire(), &mut cancel).await??;
        debug!(
            permit_wait_ms = (admission.admitted_at() - entered_at).as_millis() as u64,
            "Permit acquired"
        );
        let slot =
            interruptible(CallState::AwaitingWindow, self.limiter.reserve(), &mut cancel).await?;
        let lease =
            interruptible(CallState::AwaitingWindow, self.channel.acquire(), &mut cancel).await?;

        // An unencodable document leaves without touching the window
        let body = lease.encode(document)?;
        let waited = slot.waited();
        let dispatched_at = slot.commit();

        debug!(
            state = %CallState::Dispatching,
            transport = lease.transport_name(),
            bytes = body.len(),
            waited_ms = waited.as_millis() as u64,
            "Dispatching document"
        );
        let response = lease.send(body, signature).await;

        drop(lease);
        drop(admission);

        Ok(DispatchResponse {
            body: response?,
            dispatched_at,
            queued_for: dispatched_at - entered_at,
        })
    }
}

fn observe(outcome: CallOutcome<'_>, result: &Result<DispatchResponse>) {
    match result {
        Ok(response) => {
            outcome.completed();
            info!(
                state = %CallState::Completed,
                queued_ms = response.queued_for().as_millis() as u64,
                bytes = response.body().len(),
                "Document dispatched"
            );
        }
        Err(e @ GatewayError::TransportFailure(_)) => {
            outcome.transport_failure();
            warn!(state = %CallState::Failed, error = %e, "Dispatch failed");
        }
        Err(e @ GatewayError::InterruptedWait { .. }) => {
            outcome.interrupted();
            warn!(state = %CallState::Failed, error = %e, "Submission cancelled");
        }
        Err(e) => {
            outcome.rejected();
            warn!(state = %CallState::Failed, kind = e.kind(), error = %e, "Submission rejected");
        }
    }
}

/// Await `wait` unless `cancel` completes first
async fn interruptible<F, C>(
    stage: CallState,
    wait: F,
    cancel: &mut Pin<&mut C>,
) -> Result<F::Output>
where
    F: Future,
    C: Future<Output = ()>,
{
    debug!(state = %stage, "Waiting");

    tokio::select! {
        biased;
        output = wait => Ok(output),
        () = cancel.as_mut() => Err(GatewayError::interrupted(stage)),
    }
}
