#![allow(dead_code)]

use order::{
    abstract_trait::{
        order::service::OrderCommandServiceTrait, order_item::service::OrderItemCommandServiceTrait,
    },
    domain::{
        requests::{order::CreateOrderCommand, order_item::CreateOrderItemCommand},
        response::{order::OrderResponse, order_item::OrderItemResponse},
    },
    repository::memory::MemoryStore,
    state::AppState,
};
use rust_decimal::Decimal;
use shared::context::RequestContext;
use std::time::Duration;
use uuid::Uuid;

pub struct Harness {
    pub store: MemoryStore,
    pub state: AppState,
}

pub fn harness() -> Harness {
    let store = MemoryStore::new();
    let state = AppState::in_memory(&store, Duration::from_secs(5));
    Harness { store, state }
}

pub fn ctx() -> RequestContext {
    RequestContext::background()
}

pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn create_order_command(customer_id: Uuid, total: Decimal, status: &str) -> CreateOrderCommand {
    CreateOrderCommand {
        customer_id,
        total,
        status: status.to_string(),
    }
}

pub fn create_item_command(order_id: Uuid, quantity: i32, price: Decimal) -> CreateOrderItemCommand {
    CreateOrderItemCommand {
        order_id,
        product_id: Uuid::now_v7(),
        quantity,
        price,
    }
}

pub async fn seed_order(h: &Harness, status: &str) -> OrderResponse {
    h.state
        .di_container
        .order_command
        .create_order(&ctx(), &create_order_command(Uuid::now_v7(), money(10000), status))
        .await
        .expect("seed order")
        .data
}

pub async fn seed_item(h: &Harness, order_id: Uuid, quantity: i32) -> OrderItemResponse {
    h.state
        .di_container
        .order_item_command
        .create_order_item(&ctx(), &create_item_command(order_id, quantity, money(2500)))
        .await
        .expect("seed item")
        .data
}

/// Keeps consecutive `created_at` values distinct.
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(2)).await;
}
