//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::{ActorEntity, FrameworkError};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Instead of defining ad-hoc messages for every operation, the actor speaks a fixed set of
/// operations that apply to any ledger of resources:
///
/// - **Create**: Admission + commit. Uses [`ActorEntity::Create`] and answers the committed entity.
/// - **Get (Read)**: Fetches the current state of one entity by ID.
/// - **List**: Snapshot of the whole ledger in creation order.
/// - **Summary**: The entity-defined [`ActorEntity::Summary`] of ledger and state.
/// - **Action**: Executes a custom [`ActorEntity::Action`] on one entity.
///
/// Each message is handled to completion before the next one is read, so the response always
/// reflects a state that no other request was halfway through changing.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Summary {
        respond_to: Response<T::Summary, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}
