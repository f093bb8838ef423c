//! Pure data structures (DTOs). [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod drink;
pub mod order;

pub use drink::*;
pub use order::*;
