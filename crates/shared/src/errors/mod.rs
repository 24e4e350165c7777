mod error;
mod outcome;
mod repository;
mod service;

pub use self::error::ErrorResponse;
pub use self::outcome::ErrorOutcome;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
