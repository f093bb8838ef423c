//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`Order`] to be managed
//! by the generic [`ResourceActor`](crate::framework::ResourceActor). It is where the admission
//! rules of the bar live.
//!
//! # Admission
//! Checks run in a fixed order and stop at the first failure, because callers act on which
//! error they see:
//! 1. **Shape**: customer and drink present, drink on the menu -> `InvalidRequest`
//! 2. **Duplicate**: the customer has no order being served -> `DuplicateOrder`
//! 3. **Capacity**: the drink fits under the ceiling -> `CapacityExceeded`
//!
//! The drink's cost is resolved once, in step 1, and carried in [`Admission`] to the commit and
//! from there on the [`Order`] itself, so nothing after validation looks it up again.

use crate::framework::{ActorEntity, Ledger};
use crate::model::{CustomerId, DrinkDefinition, Order, OrderCreate, OrderId};
use crate::order_actor::{
    BarState, CapacitySnapshot, CompletionScheduler, OrderAction, OrderActionResult, OrderError,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

/// An order request that passed every admission check.
#[derive(Debug, Clone)]
pub struct Admission {
    pub customer_id: CustomerId,
    pub drink: DrinkDefinition,
}

/// Dependencies injected into the order actor when it starts.
#[derive(Clone)]
pub struct OrderContext {
    pub scheduler: Arc<dyn CompletionScheduler>,
    /// Delay between admission and completion, identical for every drink.
    pub serving_time: Duration,
}

impl OrderContext {
    pub fn new(scheduler: Arc<dyn CompletionScheduler>, serving_time: Duration) -> Self {
        Self {
            scheduler,
            serving_time,
        }
    }
}

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Admitted = Admission;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type State = BarState;
    type Summary = CapacitySnapshot;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn admit(
        params: OrderCreate,
        ledger: &Ledger<Self>,
        state: &BarState,
    ) -> Result<Admission, OrderError> {
        let customer_id = CustomerId::parse(params.customer_id)
            .ok_or_else(|| OrderError::InvalidRequest("customerId is required".into()))?;
        if params.drink_type.trim().is_empty() {
            return Err(OrderError::InvalidRequest("drinkType is required".into()));
        }
        let drink = state.catalog.lookup(&params.drink_type).cloned().ok_or_else(|| {
            OrderError::InvalidRequest(format!("{} is not served at this bar", params.drink_type))
        })?;

        if ledger
            .find(|order| order.is_serving() && order.customer_id == customer_id)
            .is_some()
        {
            return Err(OrderError::DuplicateOrder(customer_id));
        }

        state.capacity.check(drink.capacity_cost)?;

        Ok(Admission { customer_id, drink })
    }

    /// Reserves the drink's capacity and builds the serving order.
    fn commit(id: OrderId, admission: Admission, state: &mut BarState) -> Self {
        state.capacity.reserve(admission.drink.capacity_cost);
        Order::new(id, admission.customer_id, admission.drink, Utc::now())
    }

    /// Arms the completion; the order is already in the ledger.
    fn on_create(&self, ctx: &OrderContext) {
        ctx.scheduler.schedule(self.id, ctx.serving_time);
    }

    fn handle_action(
        &mut self,
        action: OrderAction,
        state: &mut BarState,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Complete => {
                let released = self
                    .complete(Utc::now())
                    .ok_or(OrderError::AlreadyCompleted(self.id))?;
                state.capacity.release(released);
                Ok(OrderActionResult::Complete { released })
            }
        }
    }

    fn summarize(ledger: &Ledger<Self>, state: &BarState) -> CapacitySnapshot {
        CapacitySnapshot {
            occupied: state.capacity.occupied(),
            ceiling: state.capacity.ceiling(),
            serving: ledger.iter().filter(|order| order.is_serving()).count(),
            total: ledger.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn state(ceiling: u32) -> BarState {
        let catalog = Catalog::new(vec![
            DrinkDefinition::new("A", 6),
            DrinkDefinition::new("B", 5),
        ])
        .unwrap();
        BarState::new(catalog, ceiling)
    }

    fn admit_and_commit(ledger: &mut Ledger<Order>, state: &mut BarState, customer: &str, drink: &str) -> Result<OrderId, OrderError> {
        let admission = Order::admit(OrderCreate::new(customer, drink), ledger, state)?;
        let id = OrderId(ledger.len() as u64 + 1);
        ledger.append(Order::commit(id, admission, state));
        Ok(id)
    }

    #[test]
    fn test_shape_errors_come_first() {
        let mut ledger = Ledger::new();
        let mut state = state(10);
        admit_and_commit(&mut ledger, &mut state, "1", "A").unwrap();

        // Same customer and an unknown drink: the shape error wins over the duplicate.
        let err = Order::admit(OrderCreate::new("1", "wine"), &ledger, &state).unwrap_err();
        assert!(matches!(err, OrderError::InvalidRequest(_)));

        let err = Order::admit(OrderCreate::new("2", ""), &ledger, &state).unwrap_err();
        assert!(matches!(err, OrderError::InvalidRequest(_)));

        let err = Order::admit(OrderCreate::new("", "a"), &ledger, &state).unwrap_err();
        assert!(matches!(err, OrderError::InvalidRequest(_)));
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let mut ledger = Ledger::new();
        let mut state = state(10);
        admit_and_commit(&mut ledger, &mut state, "1", "A").unwrap();

        // B does not fit either, but the customer already being served is reported.
        let err = Order::admit(OrderCreate::new("1", "B"), &ledger, &state).unwrap_err();
        assert_eq!(err, OrderError::DuplicateOrder(CustomerId::parse("1").unwrap()));

        let err = Order::admit(OrderCreate::new("2", "B"), &ledger, &state).unwrap_err();
        assert_eq!(
            err,
            OrderError::CapacityExceeded {
                occupied: 6,
                requested: 5,
                ceiling: 10
            }
        );
    }

    #[test]
    fn test_commit_uses_canonical_name_and_cost() {
        let mut ledger = Ledger::new();
        let mut state = state(10);
        let id = admit_and_commit(&mut ledger, &mut state, "1", "b").unwrap();

        let order = ledger.get(&id).unwrap();
        assert_eq!(order.drink_type, "B");
        assert_eq!(order.capacity_cost, 5);
        assert_eq!(state.capacity.occupied(), 5);
    }

    #[test]
    fn test_complete_releases_once() {
        let mut ledger = Ledger::new();
        let mut state = state(10);
        let id = admit_and_commit(&mut ledger, &mut state, "1", "A").unwrap();
        let order = ledger.get_mut(&id).unwrap();

        let result = order.handle_action(OrderAction::Complete, &mut state);
        assert_eq!(result, Ok(OrderActionResult::Complete { released: 6 }));
        assert_eq!(state.capacity.occupied(), 0);

        let again = order.handle_action(OrderAction::Complete, &mut state);
        assert_eq!(again, Err(OrderError::AlreadyCompleted(id)));
        assert_eq!(state.capacity.occupied(), 0);

        // The customer may order again once the previous order completed.
        assert!(admit_and_commit(&mut ledger, &mut state, "1", "A").is_ok());
        let summary = Order::summarize(&ledger, &state);
        assert_eq!(
            summary,
            CapacitySnapshot {
                occupied: 6,
                ceiling: 10,
                serving: 1,
                total: 2
            }
        );
    }
}
