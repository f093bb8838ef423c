//! # Completion Scheduling
//!
//! Every admitted order is armed exactly once, from the order actor's `on_create` hook, after
//! the order is visible in the ledger. When the delay elapses the scheduler sends
//! [`OrderAction::Complete`] through the actor's own channel, so the completion is serialized
//! with admissions like any other request.
//!
//! - [`TokioScheduler`] sleeps on the Tokio clock. Pair it with `tokio::time::pause()` in tests.
//! - [`ManualScheduler`] only records what was armed and fires it when a test asks.

use crate::clients::OrderClient;
use crate::framework::WeakResourceClient;
use crate::model::{Order, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};

/// Arms a one-shot completion for an admitted order.
pub trait CompletionScheduler: Send + Sync {
    fn schedule(&self, id: OrderId, delay: Duration);
}

/// Completes orders from a spawned Tokio task per order.
///
/// Holds only a weak handle on the actor: pending timers do not keep it running, and a timer
/// that fires after shutdown is dropped.
#[derive(Clone)]
pub struct TokioScheduler {
    client: WeakResourceClient<Order>,
}

impl TokioScheduler {
    pub fn new(client: WeakResourceClient<Order>) -> Self {
        Self { client }
    }
}

impl CompletionScheduler for TokioScheduler {
    fn schedule(&self, id: OrderId, delay: Duration) {
        let client = self.client.clone();
        debug!(%id, ?delay, "Completion armed");

        tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;
                let Some(client) = client.upgrade() else {
                    debug!("Actor stopped, completion dropped");
                    return;
                };
                match client.perform_action(id, OrderAction::Complete).await {
                    Ok(OrderActionResult::Complete { released }) => {
                        info!(released, "Order completed")
                    }
                    Err(e) => warn!(error = %e, "Completion failed"),
                }
            }
            .instrument(info_span!("completion", %id)),
        );
    }
}

/// Scheduler for tests: records armed orders and fires them on demand.
///
/// Clones share the same record, so a test can keep one handle while the actor owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    armed: Arc<Mutex<Vec<(OrderId, Duration)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders armed and not fired yet, in arming order.
    pub fn armed(&self) -> Vec<OrderId> {
        self.lock().iter().map(|(id, _)| *id).collect()
    }

    /// Delay the order was armed with, while it is still pending.
    pub fn delay_of(&self, id: OrderId) -> Option<Duration> {
        self.lock()
            .iter()
            .find(|(pending, _)| *pending == id)
            .map(|(_, delay)| *delay)
    }

    /// Fires the completion of `id` through `client`.
    ///
    /// Returns `None` if `id` is not armed: never scheduled, or already fired.
    pub async fn fire(&self, client: &OrderClient, id: OrderId) -> Option<Result<u32, OrderError>> {
        {
            let mut armed = self.lock();
            let position = armed.iter().position(|(pending, _)| *pending == id)?;
            armed.remove(position);
        }
        Some(client.complete(id).await)
    }

    /// Fires every pending completion in arming order.
    pub async fn fire_all(&self, client: &OrderClient) -> Vec<Result<u32, OrderError>> {
        let pending: Vec<OrderId> = std::mem::take(&mut *self.lock())
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        let mut results = Vec::with_capacity(pending.len());
        for id in pending {
            results.push(client.complete(id).await);
        }
        results
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(OrderId, Duration)>> {
        self.armed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CompletionScheduler for ManualScheduler {
    fn schedule(&self, id: OrderId, delay: Duration) {
        debug!(%id, ?delay, "Completion armed (manual)");
        self.lock().push((id, delay));
    }
}
