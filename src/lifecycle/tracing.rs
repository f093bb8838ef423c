//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Log lines hide the module prefix (`with_target(false)`); the actor tags its events with an
//! `entity_type` field instead.
//!
//! ```bash
//! # Admissions, rejections and completions
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the actor loop
//! RUST_LOG=bar_capacity::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! | Level | Event |
//! |-------|-------|
//! | `info` | Actor start and shutdown, `Created`, `Order accepted`, `Order completed` |
//! | `warn` | `Create rejected` with the admission error, failed completions |
//! | `debug` | Every request with its payload, completions armed |
//!
//! A rejected order at `info` level:
//!
//! ```text
//! WARN Create rejected entity_type="Order" error=Capacity exceeded: 2 occupied + 2 requested > 3
//! ```
//!
//! Timer tasks run inside a `completion` span holding the order id:
//!
//! ```text
//! INFO completion: Order completed id=order_1 released=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
