use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    model::order::Order as OrderModel,
    repository::{order::lock_order, order_item},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{config::ConnectionPool, context::RequestContext, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        ctx: &RequestContext,
        order: &OrderModel,
    ) -> Result<OrderModel, RepositoryError> {
        const OP: &str = "order.create";
        let id = order.id();

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let result = sqlx::query_as::<_, OrderModel>(
                r#"
                INSERT INTO orders (id, customer_id, total, status, created_at, updated_at, deleted_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, customer_id, total, status, created_at, updated_at, deleted_at
                "#,
            )
            .bind(id)
            .bind(order.customer_id)
            .bind(order.total)
            .bind(&order.status)
            .bind(order.base.created_at)
            .bind(order.base.updated_at)
            .bind(order.base.deleted_at)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create order {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?;

            info!("✅ Created order {} for customer {}", result.id(), result.customer_id);
            Ok(result)
        })
        .await
    }

    async fn update_order(
        &self,
        ctx: &RequestContext,
        order: &OrderModel,
    ) -> Result<OrderModel, RepositoryError> {
        const OP: &str = "order.update";
        let id = order.id();

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let result = sqlx::query_as::<_, OrderModel>(
                r#"
                UPDATE orders
                SET customer_id = $2,
                    total       = $3,
                    status      = $4,
                    updated_at  = GREATEST($5, updated_at)
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING id, customer_id, total, status, created_at, updated_at, deleted_at
                "#,
            )
            .bind(id)
            .bind(order.customer_id)
            .bind(order.total)
            .bind(&order.status)
            .bind(order.base.updated_at)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update order {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?
            .ok_or_else(|| RepositoryError::not_found("order", id))?;

            info!("🔄 Updated order {}", id);
            Ok(result)
        })
        .await
    }

    async fn delete_order(&self, ctx: &RequestContext, id: Uuid) -> Result<(), RepositoryError> {
        const OP: &str = "order.delete";
        info!("🗑️ Soft deleting order {} and its items", id);

        ctx.run(OP, async {
            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let found = lock_order(&mut *tx, id, false)
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;
            if !found {
                return Err(RepositoryError::not_found("order", id));
            }

            let deleted_at = Utc::now();

            let items = order_item::soft_delete_by_order(&mut *tx, id, deleted_at)
                .await
                .map_err(|err| {
                    error!("❌ Failed to soft delete items of order {}: {:?}", id, err);
                    RepositoryError::store(OP, Some(id))(err)
                })?;

            sqlx::query(
                r#"
                UPDATE orders
                SET deleted_at = $2
                WHERE id = $1
                "#,
            )
            .bind(id)
            .bind(deleted_at)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to soft delete order {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            info!("✅ Soft deleted order {} with {} item(s)", id, items);
            Ok(())
        })
        .await
    }

    async fn hard_delete_order(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        const OP: &str = "order.hard_delete";
        info!("❌ Hard deleting order {} and its items", id);

        ctx.run(OP, async {
            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let found = lock_order(&mut *tx, id, true)
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;
            if !found {
                return Err(RepositoryError::not_found("order", id));
            }

            let items = order_item::hard_delete_by_order(&mut *tx, id)
                .await
                .map_err(|err| {
                    error!("❌ Failed to hard delete items of order {}: {:?}", id, err);
                    RepositoryError::store(OP, Some(id))(err)
                })?;

            sqlx::query(
                r#"
                DELETE FROM orders
                WHERE id = $1
                "#,
            )
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to hard delete order {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            info!("✅ Hard deleted order {} with {} item(s)", id, items);
            Ok(())
        })
        .await
    }
}
