//! # Framework Errors
//!
//! Transport-level errors shared by every actor and client. Entity errors travel through
//! unchanged in [`FrameworkError::EntityError`] so typed clients can hand them back to callers.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(#[source] E),
}
