//! The bar's occupied-capacity counter.

use crate::order_actor::OrderError;
use tracing::error;

/// Tracks how much of the bar's capacity is taken by orders being served.
///
/// Owned by the order actor's state; only admission (`reserve`) and completion (`release`)
/// change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityAccountant {
    occupied: u32,
    ceiling: u32,
}

impl CapacityAccountant {
    pub fn new(ceiling: u32) -> Self {
        Self {
            occupied: 0,
            ceiling,
        }
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn available(&self) -> u32 {
        self.ceiling.saturating_sub(self.occupied)
    }

    /// `CapacityExceeded` if `cost` does not fit under the ceiling right now.
    pub fn check(&self, cost: u32) -> Result<(), OrderError> {
        if u64::from(self.occupied) + u64::from(cost) > u64::from(self.ceiling) {
            return Err(OrderError::CapacityExceeded {
                occupied: self.occupied,
                requested: cost,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }

    /// Takes `cost` out of the pool. Callers run `check` first, in the same critical section.
    pub fn reserve(&mut self, cost: u32) {
        debug_assert!(self.check(cost).is_ok(), "reserve without a passing check");
        self.occupied += cost;
    }

    /// Gives `cost` back to the pool.
    pub fn release(&mut self, cost: u32) {
        debug_assert!(cost <= self.occupied, "release larger than occupied capacity");
        if cost > self.occupied {
            error!(occupied = self.occupied, cost, "Release larger than occupied capacity");
        }
        self.occupied = self.occupied.saturating_sub(cost);
    }
}
