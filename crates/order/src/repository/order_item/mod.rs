mod command;
mod query;

pub use self::command::OrderItemCommandRepository;
pub use self::query::OrderItemQueryRepository;

use crate::model::order_item::OrderItem as OrderItemModel;
use chrono::{DateTime, Utc};
use sqlx::PgConnection;
use uuid::Uuid;

pub(crate) async fn insert_order_item(
    conn: &mut PgConnection,
    item: &OrderItemModel,
) -> Result<OrderItemModel, sqlx::Error> {
    sqlx::query_as::<_, OrderItemModel>(
        r#"
        INSERT INTO order_items (id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at
        "#,
    )
    .bind(item.id())
    .bind(item.order_id)
    .bind(item.product_id)
    .bind(item.quantity)
    .bind(item.price)
    .bind(item.base.created_at)
    .bind(item.base.updated_at)
    .bind(item.base.deleted_at)
    .fetch_one(&mut *conn)
    .await
}

/// Marks every active item of the order as deleted at `deleted_at`.
pub(crate) async fn soft_delete_by_order(
    conn: &mut PgConnection,
    order_id: Uuid,
    deleted_at: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE order_items
        SET deleted_at = $2
        WHERE order_id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(order_id)
    .bind(deleted_at)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

/// Physically removes every item of the order, trashed ones included.
pub(crate) async fn hard_delete_by_order(
    conn: &mut PgConnection,
    order_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM order_items
        WHERE order_id = $1
        "#,
    )
    .bind(order_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}
