//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must implement to be managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). The actor owns three things for
//! the entity type: the append-only [`Ledger`] of every entity ever created, an aggregate
//! [`State`](ActorEntity::State) shared by all of them (for orders: the catalog and the capacity
//! counter), and an injected [`Context`](ActorEntity::Context) of dependencies.
//!
//! # Hooks Are Synchronous
//! Every hook runs inside the actor's message loop and is a single bounded critical section.
//! None of them may await, so an admission check and the commit that follows it can never be
//! interleaved with another request.
//!
//! # Create Flow
//! 1. [`admit`](ActorEntity::admit) validates the request against the ledger and the state and
//!    resolves everything the commit needs (the `Admitted` value).
//! 2. The actor allocates the next id.
//! 3. [`commit`](ActorEntity::commit) builds the entity and applies its effect on the state.
//!    It cannot fail: anything that could fail belongs in `admit`.
//! 4. The entity is appended to the ledger.
//! 5. [`on_create`](ActorEntity::on_create) runs with the injected context.

use crate::framework::Ledger;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// We use "Associated Types" to enforce type safety: an `Order` entity requires an
/// `OrderCreate` payload and can only receive `OrderAction`s.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier. Ids are allocated from a counter and must order the same way
    /// they were allocated.
    type Id: Ord + Copy + Send + Sync + Display + Debug + From<u64>;

    /// The data required to request a new instance (DTO - Data Transfer Object).
    type Create: Send + Debug;

    /// A create request that passed admission, carrying whatever `admit` resolved.
    type Admitted: Send + Debug;

    /// Enum representing resource-specific operations (e.g., `Complete`).
    type Action: Send + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Debug;

    /// Aggregate state owned by the actor next to the ledger.
    type State: Send + 'static;

    /// Read-only view of the ledger and state returned by `Summary` requests.
    type Summary: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity was committed with.
    fn id(&self) -> Self::Id;

    /// Decide whether a create request may be committed.
    fn admit(
        params: Self::Create,
        ledger: &Ledger<Self>,
        state: &Self::State,
    ) -> Result<Self::Admitted, Self::Error>;

    /// Construct the entity and apply its effect on the aggregate state.
    fn commit(id: Self::Id, admitted: Self::Admitted, state: &mut Self::State) -> Self;

    /// Called once, after the entity is visible in the ledger.
    fn on_create(&self, _ctx: &Self::Context) {}

    /// Handle a custom resource-specific action.
    fn handle_action(
        &mut self,
        action: Self::Action,
        state: &mut Self::State,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Build the summary answered to `Summary` requests.
    fn summarize(ledger: &Ledger<Self>, state: &Self::State) -> Self::Summary;
}
