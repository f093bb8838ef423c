//! State the order actor owns next to its ledger.

use crate::model::Catalog;
use crate::order_actor::CapacityAccountant;
use serde::Serialize;

/// Aggregate state of the bar: the menu and the capacity counter.
#[derive(Debug, Clone)]
pub struct BarState {
    pub catalog: Catalog,
    pub capacity: CapacityAccountant,
}

impl BarState {
    pub fn new(catalog: Catalog, ceiling: u32) -> Self {
        Self {
            catalog,
            capacity: CapacityAccountant::new(ceiling),
        }
    }
}

/// Capacity figures taken in one critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacitySnapshot {
    /// Sum of the capacity cost of every serving order.
    pub occupied: u32,
    pub ceiling: u32,
    /// Number of orders being served.
    pub serving: usize,
    /// Number of orders ever admitted.
    pub total: usize,
}
