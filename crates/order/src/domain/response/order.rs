use crate::{domain::response::order_item::OrderItemResponse, model::order::Order as OrderModel};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub total: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&OrderModel> for OrderResponse {
    fn from(value: &OrderModel) -> Self {
        OrderResponse {
            id: value.base.id,
            customer_id: value.customer_id,
            total: value.total,
            status: value.status.clone(),
            created_at: value.base.created_at,
            updated_at: value.base.updated_at,
        }
    }
}

// model to response
impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse::from(&value)
    }
}

impl OrderResponse {
    pub fn from_orders(orders: Vec<OrderModel>) -> Vec<Self> {
        orders.into_iter().map(OrderResponse::from).collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderWithItemsResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderModel> for OrderWithItemsResponse {
    fn from(mut value: OrderModel) -> Self {
        let items = OrderItemResponse::from_order_items(std::mem::take(&mut value.items));

        OrderWithItemsResponse {
            order: OrderResponse::from(value),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::order_item::OrderItem;

    #[test]
    fn projection_carries_business_fields() {
        let order = OrderModel::new(Uuid::now_v7(), Decimal::new(10000, 2), "pending");

        let response = OrderResponse::from(&order);

        assert_eq!(response.id, order.id());
        assert_eq!(response.customer_id, order.customer_id);
        assert_eq!(response.total, Decimal::new(10000, 2));
        assert_eq!(response.status, "pending");
        assert_eq!(response.created_at, order.base.created_at);
    }

    #[test]
    fn with_items_projection_flattens_order_fields() {
        let mut order = OrderModel::new(Uuid::now_v7(), Decimal::new(2000, 2), "paid");
        order
            .items
            .push(OrderItem::new(order.id(), Uuid::now_v7(), 2, Decimal::new(1000, 2)));

        let response = OrderWithItemsResponse::from(order.clone());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], serde_json::json!(order.id()));
        assert_eq!(json["status"], "paid");
        assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["items"][0]["order_id"], serde_json::json!(order.id()));
    }
}
