//! Custom actions for the Order actor.
//!
//! These actions are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! inside the actor loop, so they share the critical section with admissions.

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Marks a serving order as completed and releases its capacity.
    ///
    /// # Errors
    /// Fails with `AlreadyCompleted` if the order was completed before.
    Complete,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    /// Result from Complete action - the capacity given back to the bar
    Complete { released: u32 },
}
