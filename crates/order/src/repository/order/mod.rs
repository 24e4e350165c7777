mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

use sqlx::PgConnection;
use uuid::Uuid;

/// Takes a row lock on the order for the rest of the transaction.
///
/// Returns `false` when no matching row exists. Trashed rows only match when
/// `include_trashed` is set.
pub(crate) async fn lock_order(
    conn: &mut PgConnection,
    id: Uuid,
    include_trashed: bool,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id
        FROM orders
        WHERE id = $1 AND ($2 OR deleted_at IS NULL)
        FOR UPDATE
        "#,
    )
    .bind(id)
    .bind(include_trashed)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.is_some())
}

/// Returns the subset of `ids` that reference active orders, holding a share
/// lock on them so a concurrent cascade cannot remove them mid-write.
pub(crate) async fn live_order_ids(
    conn: &mut PgConnection,
    ids: &[Uuid],
) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id
        FROM orders
        WHERE id = ANY($1) AND deleted_at IS NULL
        FOR SHARE
        "#,
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await
}
