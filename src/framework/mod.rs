//! Generic actor framework for resource ledgers.
//!
//! This module provides the building blocks for actors that own an append-only ledger of
//! entities plus the aggregate state those entities share, and serialize every admission,
//! action and read through a single message loop.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the [`Ledger`] and the state
//! - [`ResourceClient`] / [`WeakResourceClient`] - Typed handles for sending requests
//! - [`ActorClient`] - Trait for domain clients, with default read operations
//! - [`FrameworkError`] - Transport errors wrapping the entity's own error
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ledger;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::{ResourceClient, WeakResourceClient};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use ledger::Ledger;
pub use message::{ResourceRequest, Response};
