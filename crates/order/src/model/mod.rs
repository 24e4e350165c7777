pub mod base;
pub mod order;
pub mod order_item;
