use sqlx::Error as SqlxError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store failure during {operation}{}: {source}", display_id(.id))]
    Store {
        operation: &'static str,
        id: Option<Uuid>,
        #[source]
        source: SqlxError,
    },

    #[error("{operation} was cancelled before completion")]
    Cancelled { operation: &'static str },
}

fn display_id(id: &Option<Uuid>) -> String {
    id.map(|id| format!(" (id {id})")).unwrap_or_default()
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    /// Wraps a driver error with the operation and entity it happened on.
    ///
    /// Foreign-key violations reported by the database are surfaced as
    /// [`RepositoryError::ForeignKey`] and unique violations as
    /// [`RepositoryError::Conflict`] instead of a store failure.
    pub fn store(operation: &'static str, id: Option<Uuid>) -> impl FnOnce(SqlxError) -> Self {
        move |source| match &source {
            SqlxError::Database(db) if db.is_foreign_key_violation() => {
                Self::ForeignKey(format!("{operation}: {}", db.message()))
            }
            SqlxError::Database(db) if db.is_unique_violation() => {
                Self::Conflict(format!("{operation}: {}", db.message()))
            }
            _ => Self::Store {
                operation,
                id,
                source,
            },
        }
    }

    pub fn duplicate(operation: &'static str, id: Uuid) -> Self {
        Self::Conflict(format!("{operation}: id {id} already exists"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failure_message_carries_operation_and_id() {
        let id = Uuid::nil();
        let err = RepositoryError::store("order.update", Some(id))(SqlxError::RowNotFound);

        let message = err.to_string();
        assert!(message.contains("order.update"));
        assert!(message.contains(&id.to_string()));
    }

    #[test]
    fn store_failure_without_id() {
        let err = RepositoryError::store("order.find_all", None)(SqlxError::PoolTimedOut);

        assert!(matches!(err, RepositoryError::Store { id: None, .. }));
        assert!(err.to_string().starts_with("Store failure during order.find_all:"));
    }

    #[test]
    fn duplicate_is_a_conflict_not_a_store_failure() {
        let id = Uuid::nil();
        let err = RepositoryError::duplicate("order.create", id);

        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(
            err.to_string(),
            format!("Conflict: order.create: id {id} already exists")
        );
    }
}
