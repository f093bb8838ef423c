//! # Bar Capacity
//!
//! > **Admission control for a bar with a fixed serving capacity.**
//!
//! Each drink on the menu occupies part of the bar's capacity while it is being served. An
//! order is admitted only if its customer has nothing else being served and its drink fits
//! under the ceiling; after a fixed serving delay it completes and gives its capacity back.
//!
//! ## Core Concepts
//!
//! ### One owner, one queue
//! Every admission, completion and read is a message to a single [`ResourceActor`](framework::ResourceActor)
//! that owns the order ledger, the menu and the capacity counter. Messages are handled one at a
//! time, so a check and the reservation that follows it can never interleave with another
//! request. There are no locks around the state.
//!
//! ### Admission order
//! A request is checked for shape, then for a duplicate serving order, then for capacity. The
//! first failure is reported and nothing changes; see [`order_actor::entity`].
//!
//! ### Completion
//! Admitted orders arm a one-shot completion on a [`CompletionScheduler`](order_actor::CompletionScheduler).
//! The completion comes back through the same queue; an order completes at most once and releases
//! exactly the capacity it took.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its client, the append-only [`Ledger`](framework::Ledger) and
//! the [`mock`](framework::mock) client used in tests.
//!
//! ### 2. The Bar ([`order_actor`], [`model`])
//! [`Order`](model::Order), the [`Catalog`](model::Catalog), the
//! [`CapacityAccountant`](order_actor::CapacityAccountant) and the admission rules.
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient): `submit`, `list_all`, `get`, `capacity`, `complete`.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`BarConfig`](lifecycle::BarConfig), [`BarSystem`](lifecycle::BarSystem) and tracing setup.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! BAR_CONFIG=/etc/bar.json cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
