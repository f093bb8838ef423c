//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a ledger of entities and
//! their aggregate state. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to everything it owns.

use crate::framework::{
    ActorEntity, FrameworkError, Ledger, ResourceClient, ResourceRequest,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a ledger of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the `ledger`, the aggregate `state`
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop. An admission check and the commit
/// that follows it run inside one message, so no other create or action can observe or change
/// the state between them. We don't need a `Mutex` around the state: exclusive ownership inside
/// the task gives the same guarantee.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with the initial state to get the `actor` and `client`.
/// 2.  **Wire**: Pass dependencies (schedulers, other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Operations
///
/// * **Create**:
///     1. Calls `T::admit`. A rejection is answered without touching the id counter.
///     2. Allocates the next id from the internal counter.
///     3. Calls `T::commit`, which applies the entity's effect on the state.
///     4. Appends the entity to the ledger.
///     5. Calls the `on_create` hook and answers the committed entity.
///
/// * **Get** / **List** / **Summary**: Answered from the ledger and state as they are between messages.
///
/// * **Action**:
///     1. Looks up the entity in the ledger (mutable access).
///     2. Calls `handle_action` with the custom action and the state.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    ledger: Ledger<T>,
    state: T::State,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `state` - The aggregate state the actor will own.
    pub fn new(buffer_size: usize, state: T::State) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            ledger: Ledger::new(),
            state,
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every strong client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to `on_create`. This allows entities to reach
    /// dependencies (like a scheduler holding this actor's own client) that could only be built
    /// *after* the actor was instantiated.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "bar_capacity::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match T::admit(params, &self.ledger, &self.state) {
                        Ok(admitted) => {
                            let id = T::Id::from(self.next_id);
                            self.next_id += 1;

                            let item = T::commit(id, admitted, &mut self.state);
                            self.ledger.append(item.clone());
                            item.on_create(&context);
                            info!(entity_type, %id, size = self.ledger.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.ledger.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.ledger.len(), "List");
                    let _ = respond_to.send(Ok(self.ledger.snapshot()));
                }
                ResourceRequest::Summary { respond_to } => {
                    let summary = T::summarize(&self.ledger, &self.state);
                    debug!(entity_type, ?summary, "Summary");
                    let _ = respond_to.send(Ok(summary));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.ledger.get_mut(&id) {
                        let result = item
                            .handle_action(action, &mut self.state)
                            .map_err(FrameworkError::EntityError);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.ledger.len(), "Shutdown");
    }
}
