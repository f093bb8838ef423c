//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and turns transport errors back into [`OrderError`].
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::{CapacitySnapshot, OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Admission rules run inside the actor (see [`crate::order_actor::entity`]); this client only
/// carries requests there and back.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Submits an order for `customer_id`.
    ///
    /// Returns the admitted order, now serving, or the first admission rule it broke.
    pub async fn submit(
        &self,
        customer_id: impl Into<String>,
        drink_type: impl Into<String>,
    ) -> Result<Order, OrderError> {
        self.submit_request(OrderCreate::new(customer_id, drink_type))
            .await
    }

    #[instrument(skip(self))]
    pub async fn submit_request(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("submit called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(id = %order.id, customer_id = %order.customer_id, drink = %order.drink_type, "Order accepted");
        Ok(order)
    }

    /// Capacity figures consistent with the orders currently serving.
    #[instrument(skip(self))]
    pub async fn capacity(&self) -> Result<CapacitySnapshot, OrderError> {
        debug!("Sending request");
        self.inner.summary().await.map_err(Self::map_error)
    }

    /// Completes a serving order and returns the capacity it released.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: OrderId) -> Result<u32, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Complete)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Complete { released } => Ok(released),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError<OrderError>) -> Self::Error {
        match e {
            FrameworkError::EntityError(e) => e,
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, MockClient};
    use crate::model::{CustomerId, DrinkDefinition};
    use chrono::Utc;

    fn order(id: u64, customer: &str) -> Order {
        Order::new(
            OrderId(id),
            CustomerId::parse(customer).unwrap(),
            DrinkDefinition::new("beer", 2),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_submit_sends_payload_and_returns_order() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let submit_task = tokio::spawn(async move { order_client.submit("alice", "Beer").await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.customer_id, "alice");
        assert_eq!(params.drink_type, "Beer");
        responder.send(Ok(order(1, "alice"))).unwrap();

        let result = submit_task.await.unwrap().unwrap();
        assert_eq!(result.id, OrderId(1));
    }

    #[tokio::test]
    async fn test_business_errors_pass_through_unchanged() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(OrderError::CapacityExceeded {
                occupied: 9,
                requested: 2,
                ceiling: 10,
            }));
        mock.expect_create()
            .return_err(FrameworkError::EntityError(OrderError::DuplicateOrder(
                CustomerId::parse("bob").unwrap(),
            )));

        let client = OrderClient::new(mock.client());
        let busy = client.submit("carol", "beer").await.unwrap_err();
        assert_eq!(busy.http_status(), 527);
        let duplicate = client.submit("bob", "beer").await.unwrap_err();
        assert_eq!(duplicate.http_status(), 409);

        mock.verify();
    }

    #[tokio::test]
    async fn test_transport_errors_become_communication_errors() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_err(FrameworkError::ActorDropped);
        mock.expect_get().return_ok(None);

        let client = OrderClient::new(mock.client());
        let err = client.list_all().await.unwrap_err();
        assert!(matches!(err, OrderError::ActorCommunicationError(_)));
        assert!(client.get(OrderId(4)).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_capacity_returns_actor_summary() {
        let snapshot = CapacitySnapshot {
            occupied: 4,
            ceiling: 10,
            serving: 2,
            total: 3,
        };
        let mut mock = MockClient::<Order>::new();
        mock.expect_summary().return_ok(snapshot);
        mock.expect_summary().return_err(FrameworkError::ActorDropped);

        let client = OrderClient::new(mock.client());
        assert_eq!(client.capacity().await, Ok(snapshot));
        assert_eq!(
            client.capacity().await,
            Err(OrderError::ActorCommunicationError(
                "Actor dropped response channel".into()
            ))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_complete_reports_released_capacity() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let complete_task = tokio::spawn(async move { order_client.complete(OrderId(3)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(3));
        assert!(matches!(action, OrderAction::Complete));
        responder
            .send(Ok(OrderActionResult::Complete { released: 2 }))
            .unwrap();

        assert_eq!(complete_task.await.unwrap(), Ok(2));
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (client, receiver) = create_mock_client::<Order>(1);
        drop(receiver);
        let order_client = OrderClient::new(client);

        let err = order_client.capacity().await.unwrap_err();
        assert_eq!(err, OrderError::ActorCommunicationError("Actor closed".into()));
    }
}
