use crate::{
    domain::validation::validate_non_negative,
    model::{base::Base, order_item::OrderItem},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// Aggregate root. `items` is only populated by `find_with_items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct Order {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub base: Base,
    pub customer_id: Uuid,
    #[validate(custom(function = "validate_non_negative"))]
    pub total: Decimal,
    #[validate(length(min = 1, max = 50))]
    pub status: String,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(customer_id: Uuid, total: Decimal, status: impl Into<String>) -> Self {
        Self {
            base: Base::new(),
            customer_id,
            total,
            status: status.into(),
            items: Vec::new(),
        }
    }

    pub fn update(&mut self, customer_id: Uuid, total: Decimal, status: impl Into<String>) {
        self.customer_id = customer_id;
        self.total = total;
        self.status = status.into();
        self.base.mark_updated();
    }

    pub fn id(&self) -> Uuid {
        self.base.id
    }

    pub fn is_deleted(&self) -> bool {
        self.base.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_has_identity_and_equal_timestamps() {
        let order = Order::new(Uuid::now_v7(), Decimal::new(10000, 2), "pending");

        assert!(!order.id().is_nil());
        assert_eq!(order.base.created_at, order.base.updated_at);
        assert!(order.base.deleted_at.is_none());
        assert!(order.items.is_empty());
    }

    #[test]
    fn update_replaces_fields_and_keeps_items() {
        let mut order = Order::new(Uuid::now_v7(), Decimal::new(500, 2), "pending");
        order
            .items
            .push(OrderItem::new(order.id(), Uuid::now_v7(), 1, Decimal::new(500, 2)));
        let created_at = order.base.created_at;
        let customer = Uuid::now_v7();

        order.update(customer, Decimal::new(750, 2), "paid");

        assert_eq!(order.customer_id, customer);
        assert_eq!(order.total, Decimal::new(750, 2));
        assert_eq!(order.status, "paid");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.base.created_at, created_at);
        assert!(order.base.updated_at >= order.base.created_at);
    }

    #[test]
    fn negative_total_fails_validation() {
        let order = Order::new(Uuid::now_v7(), Decimal::new(-1, 0), "pending");
        let errors = order.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("total"));
    }

    #[test]
    fn empty_status_fails_validation() {
        let order = Order::new(Uuid::now_v7(), Decimal::ZERO, "");

        assert!(order.validate().is_err());
    }
}
