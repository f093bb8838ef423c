//! Represents a drink order placed at the bar.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait, allowing it to
//! be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`crate::order_actor::entity`] for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))

use crate::model::DrinkDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Identifier of the customer placing an order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// `None` when the id is empty or only whitespace.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Serving,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    /// Canonical catalog name of the drink.
    pub drink_type: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Capacity cost resolved from the catalog when the order was admitted.
    #[serde(skip)]
    pub capacity_cost: u32,
}

impl Order {
    /// Creates a new order in the `Serving` state.
    pub fn new(id: OrderId, customer_id: CustomerId, drink: DrinkDefinition, now: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id,
            drink_type: drink.name,
            status: OrderStatus::Serving,
            created_at: now,
            updated_at: now,
            capacity_cost: drink.capacity_cost,
        }
    }

    pub fn is_serving(&self) -> bool {
        self.status == OrderStatus::Serving
    }

    /// Moves a serving order to `Completed` and returns the capacity it gives back.
    ///
    /// Returns `None` and leaves the order untouched if it was already completed.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Option<u32> {
        if !self.is_serving() {
            return None;
        }
        self.status = OrderStatus::Completed;
        self.updated_at = now;
        Some(self.capacity_cost)
    }

    /// Outward view with the status rendered through the configured labels.
    pub fn view(&self, labels: &StatusLabels) -> OrderView {
        OrderView {
            id: self.id,
            customer_id: self.customer_id.clone(),
            drink_type: self.drink_type.clone(),
            status: labels.label(self.status).to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Payload for submitting a new order.
///
/// Missing fields deserialize as empty strings and are rejected at admission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: String,
    pub drink_type: String,
}

impl OrderCreate {
    pub fn new(customer_id: impl Into<String>, drink_type: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            drink_type: drink_type.into(),
        }
    }
}

/// Labels shown to callers for each [`OrderStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    pub serving: String,
    pub completed: String,
}

impl StatusLabels {
    pub fn label(&self, status: OrderStatus) -> &str {
        match status {
            OrderStatus::Serving => &self.serving,
            OrderStatus::Completed => &self.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub drink_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn serving_order() -> Order {
        Order::new(
            OrderId(1),
            CustomerId::parse("alice").unwrap(),
            DrinkDefinition::new("beer", 3),
            Utc::now(),
        )
    }

    #[test]
    fn test_complete_happens_once() {
        let mut order = serving_order();
        let later = order.created_at + Duration::seconds(5);

        assert_eq!(order.complete(later), Some(3));
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.updated_at, later);

        assert_eq!(order.complete(later + Duration::seconds(1)), None);
        assert_eq!(order.updated_at, later);
    }

    #[test]
    fn test_customer_id_rejects_blank() {
        assert!(CustomerId::parse("").is_none());
        assert!(CustomerId::parse("   ").is_none());
        assert_eq!(CustomerId::parse("7").map(|c| c.to_string()), Some("7".to_string()));
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let create: OrderCreate = serde_json::from_str(r#"{"drinkType":"beer"}"#).unwrap();
        assert_eq!(create.customer_id, "");
        assert_eq!(create.drink_type, "beer");
    }

    #[test]
    fn test_view_uses_labels() {
        let labels = StatusLabels {
            serving: "serving".into(),
            completed: "done".into(),
        };
        let mut order = serving_order();
        assert_eq!(order.view(&labels).status, "serving");
        order.complete(Utc::now());

        let json = serde_json::to_value(order.view(&labels)).unwrap();
        assert_eq!(json["status"], "done");
        assert_eq!(json["customerId"], "alice");
        assert_eq!(json["id"], 1);
    }
}
