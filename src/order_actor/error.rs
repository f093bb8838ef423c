//! Error types for the Order actor.

use crate::model::{CustomerId, OrderId};
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// `InvalidRequest`, `DuplicateOrder` and `CapacityExceeded` are the expected outcomes of an
/// admission. The caller may try again once something changed: a different drink, a completed
/// prior order, or freed capacity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Customer or drink missing, or the drink is not on the menu.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The customer already has an order being served.
    #[error("Customer {0} already has an order being served")]
    DuplicateOrder(CustomerId),

    /// Admitting the drink would push the bar over its ceiling.
    #[error("Capacity exceeded: {occupied} occupied + {requested} requested > {ceiling}")]
    CapacityExceeded {
        occupied: u32,
        requested: u32,
        ceiling: u32,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A completion arrived for an order that was already completed.
    #[error("Order already completed: {0}")]
    AlreadyCompleted(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// HTTP status a request layer answers with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            OrderError::InvalidRequest(_) => 400,
            OrderError::NotFound(_) => 404,
            OrderError::DuplicateOrder(_) => 409,
            OrderError::CapacityExceeded { .. } => 527,
            OrderError::AlreadyCompleted(_) | OrderError::ActorCommunicationError(_) => 500,
        }
    }
}
