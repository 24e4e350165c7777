mod command;
mod query;

pub use self::command::{DynOrderItemCommandService, OrderItemCommandServiceTrait};
pub use self::query::{DynOrderItemQueryService, OrderItemQueryServiceTrait};
