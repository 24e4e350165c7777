use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use serde::Serialize;
use tracing::error;

/// Caller-facing classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorOutcome {
    MissingResource,
    RejectedRequest,
    InternalFailure,
    Cancelled,
}

impl From<&ServiceError> for ErrorOutcome {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::Validation(_) => ErrorOutcome::RejectedRequest,
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound { .. } => ErrorOutcome::MissingResource,
                RepositoryError::ForeignKey(_) | RepositoryError::Conflict(_) => {
                    ErrorOutcome::RejectedRequest
                }
                RepositoryError::Store { .. } => ErrorOutcome::InternalFailure,
                RepositoryError::Cancelled { .. } => ErrorOutcome::Cancelled,
            },
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        let outcome = ErrorOutcome::from(err);

        let message = match outcome {
            ErrorOutcome::InternalFailure => {
                error!("❌ Internal failure: {err}");
                "Internal failure".to_string()
            }
            ErrorOutcome::Cancelled => "Request cancelled".to_string(),
            ErrorOutcome::MissingResource | ErrorOutcome::RejectedRequest => err.to_string(),
        };

        ErrorResponse {
            status: "error".into(),
            outcome,
            message,
        }
    }
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        ErrorResponse::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn error_kinds_map_to_outcomes() {
        let not_found = ServiceError::Repo(RepositoryError::not_found("order", Uuid::nil()));
        let fk = ServiceError::Repo(RepositoryError::ForeignKey("order missing".into()));
        let conflict = ServiceError::Repo(RepositoryError::duplicate("order.create", Uuid::nil()));
        let invalid = ServiceError::validation("id: must not be nil");
        let cancelled = ServiceError::Repo(RepositoryError::Cancelled {
            operation: "order.create",
        });

        assert_eq!(ErrorOutcome::from(&not_found), ErrorOutcome::MissingResource);
        assert_eq!(ErrorOutcome::from(&fk), ErrorOutcome::RejectedRequest);
        assert_eq!(ErrorOutcome::from(&conflict), ErrorOutcome::RejectedRequest);
        assert_eq!(ErrorOutcome::from(&invalid), ErrorOutcome::RejectedRequest);
        assert_eq!(ErrorOutcome::from(&cancelled), ErrorOutcome::Cancelled);
    }

    #[test]
    fn store_failures_do_not_leak_driver_details() {
        let err = ServiceError::Repo(RepositoryError::store(
            "order.create",
            Some(Uuid::nil()),
        )(sqlx::Error::PoolTimedOut));

        let body = ErrorResponse::from(&err);

        assert_eq!(body.outcome, ErrorOutcome::InternalFailure);
        assert_eq!(body.message, "Internal failure");
    }
}
