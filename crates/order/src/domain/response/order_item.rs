use crate::model::order_item::OrderItem as OrderItemModel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&OrderItemModel> for OrderItemResponse {
    fn from(value: &OrderItemModel) -> Self {
        OrderItemResponse {
            id: value.base.id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            created_at: value.base.created_at,
            updated_at: value.base.updated_at,
        }
    }
}

impl From<OrderItemModel> for OrderItemResponse {
    fn from(value: OrderItemModel) -> Self {
        OrderItemResponse::from(&value)
    }
}

impl OrderItemResponse {
    pub fn from_order_items(items: Vec<OrderItemModel>) -> Vec<Self> {
        items.into_iter().map(OrderItemResponse::from).collect()
    }
}
