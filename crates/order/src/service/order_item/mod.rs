mod command;
mod query;

pub use self::command::OrderItemCommandService;
pub use self::query::OrderItemQueryService;
