mod command;
mod query;

pub use self::command::OrderCommandService;
pub use self::query::OrderQueryService;
