//! # Order Actor
//!
//! The bar's admission and capacity core, built on the generic [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]: admission, commit, completion
//! - [`capacity`] - [`CapacityAccountant`], the occupied-capacity counter
//! - [`state`] - [`BarState`] (catalog + counter) and [`CapacitySnapshot`]
//! - [`scheduler`] - [`CompletionScheduler`] with the Tokio and manual implementations
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use bar_capacity::clients::OrderClient;
//! use bar_capacity::model::{Catalog, DrinkDefinition};
//! use bar_capacity::order_actor::{self, BarState, ManualScheduler, OrderContext};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::new(vec![DrinkDefinition::new("beer", 2)])?;
//!     let (actor, generic_client) = order_actor::new(BarState::new(catalog, 10));
//!     let client = OrderClient::new(generic_client);
//!
//!     let scheduler = ManualScheduler::new();
//!     let context = OrderContext::new(Arc::new(scheduler.clone()), Duration::from_secs(5));
//!     tokio::spawn(actor.run(context));
//!
//!     let order = client.submit("alice", "Beer").await?;
//!     assert_eq!(client.capacity().await?.occupied, 2);
//!
//!     scheduler.fire(&client, order.id).await;
//!     assert_eq!(client.capacity().await?.occupied, 0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod capacity;
pub mod entity;
pub mod error;
pub mod scheduler;
pub mod state;

pub use actions::*;
pub use capacity::*;
pub use entity::{Admission, OrderContext};
pub use error::*;
pub use scheduler::*;
pub use state::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor owning `state`, and its client.
pub fn new(state: BarState) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32, state)
}
