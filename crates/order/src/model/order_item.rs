use crate::{domain::validation::validate_non_negative, model::base::Base};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct OrderItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub base: Base,
    pub order_id: Uuid,
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(custom(function = "validate_non_negative"))]
    pub price: Decimal,
}

impl OrderItem {
    pub fn new(order_id: Uuid, product_id: Uuid, quantity: i32, price: Decimal) -> Self {
        Self {
            base: Base::new(),
            order_id,
            product_id,
            quantity,
            price,
        }
    }

    pub fn update(&mut self, order_id: Uuid, product_id: Uuid, quantity: i32, price: Decimal) {
        self.order_id = order_id;
        self.product_id = product_id;
        self.quantity = quantity;
        self.price = price;
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
    fn new_item_is_active_with_equal_timestamps() {
        let item = OrderItem::new(Uuid::now_v7(), Uuid::now_v7(), 2, Decimal::new(1250, 2));

        assert!(!item.id().is_nil());
        assert_eq!(item.base.created_at, item.base.updated_at);
        assert!(!item.is_deleted());
    }

    #[test]
    fn update_can_reassign_order() {
        let mut item = OrderItem::new(Uuid::now_v7(), Uuid::now_v7(), 2, Decimal::new(1250, 2));
        let id = item.id();
        let other_order = Uuid::now_v7();

        item.update(other_order, item.product_id, 3, Decimal::new(1000, 2));

        assert_eq!(item.id(), id);
        assert_eq!(item.order_id, other_order);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn quantity_must_be_positive() {
        let item = OrderItem::new(Uuid::now_v7(), Uuid::now_v7(), 0, Decimal::ONE);

        let errors = item.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }
}
