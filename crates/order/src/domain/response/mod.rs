pub mod api;
pub mod order;
pub mod order_item;
