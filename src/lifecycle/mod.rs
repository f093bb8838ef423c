//! # System Lifecycle
//!
//! Starting, wiring and stopping the bar.
//!
//! ## Startup
//!
//! 1. [`BarConfig`] is loaded and validated (menu, ceiling, serving delay, status labels).
//! 2. [`BarSystem::new`] builds the catalog and capacity counter, creates the order actor and
//!    injects its context: the completion scheduler and the serving delay.
//!
//! The scheduler needs a handle on the actor it completes orders on, so it is built *after*
//! the actor and handed over through `run(context)`:
//!
//! ```rust,ignore
//! let (order_actor, client) = order_actor::new(state);
//! let scheduler = Arc::new(TokioScheduler::new(client.downgrade()));
//! tokio::spawn(order_actor.run(OrderContext::new(scheduler, serving_time)));
//! ```
//!
//! The handle is weak. A strong one would keep the actor's channel open from inside the actor
//! and [`BarSystem::shutdown`] would never return.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for the actor task to finish
//!
//! Orders still serving at shutdown stay serving; their timers find the actor gone.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`] module.

pub mod bar_system;
pub mod config;
pub mod tracing;

pub use bar_system::*;
pub use config::*;
pub use tracing::*;
