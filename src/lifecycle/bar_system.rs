use crate::clients::OrderClient;
use crate::framework::ResourceClient;
use crate::lifecycle::{BarConfig, ConfigError};
use crate::model::{Order, StatusLabels};
use crate::order_actor::{self, BarState, CompletionScheduler, OrderContext, TokioScheduler};
use std::sync::Arc;
use tracing::{error, info};

/// The running bar: the order actor plus the handles needed to stop it.
///
/// # Example
///
/// ```ignore
/// let config = BarConfig::from_env()?;
/// let system = BarSystem::new(&config)?;
///
/// let order = system.order_client.submit("alice", "beer").await?;
///
/// system.shutdown().await?;
/// ```
pub struct BarSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    labels: StatusLabels,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BarSystem {
    /// Starts the bar with orders completed on the Tokio clock.
    ///
    /// The configuration is validated again, so one built by hand is held to the same rules as
    /// a loaded file. Must be called from within a Tokio runtime.
    pub fn new(config: &BarConfig) -> Result<Self, ConfigError> {
        Self::start(config, |client| -> Arc<dyn CompletionScheduler> {
            Arc::new(TokioScheduler::new(client.downgrade()))
        })
    }

    /// Starts the bar with a caller-supplied completion scheduler.
    pub fn with_scheduler(
        config: &BarConfig,
        scheduler: Arc<dyn CompletionScheduler>,
    ) -> Result<Self, ConfigError> {
        Self::start(config, |_| scheduler)
    }

    fn start(
        config: &BarConfig,
        scheduler: impl FnOnce(&ResourceClient<Order>) -> Arc<dyn CompletionScheduler>,
    ) -> Result<Self, ConfigError> {
        // 1. Build the state the actor will own
        config.validate()?;
        let state = BarState::new(config.catalog()?, config.capacity);

        // 2. Create the actor; the scheduler may need its client
        let (order_actor, generic_client) = order_actor::new(state);
        let context = OrderContext::new(scheduler(&generic_client), config.serving_time());

        // 3. Start it with the context injected
        let order_handle = tokio::spawn(order_actor.run(context));
        info!(
            capacity = config.capacity,
            drinks = config.drinks.len(),
            serving_time = ?config.serving_time(),
            "Bar open"
        );

        Ok(Self {
            order_client: OrderClient::new(generic_client),
            labels: config.labels(),
            handles: vec![order_handle],
        })
    }

    /// Labels used when rendering order statuses.
    pub fn labels(&self) -> &StatusLabels {
        &self.labels
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the actor's channel, then waits for the actor task.
    /// Clones of `order_client` held elsewhere keep the actor running until they are dropped too.
    /// Completions still pending only hold a weak handle and are dropped when they fire.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
