use crate::{
    abstract_trait::order_item::repository::OrderItemCommandRepositoryTrait,
    model::order_item::OrderItem as OrderItemModel,
    repository::{
        order::live_order_ids,
        order_item::{insert_order_item, soft_delete_by_order},
    },
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{config::ConnectionPool, context::RequestContext, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderItemCommandRepository {
    db: ConnectionPool,
}

impl OrderItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn missing_order(order_id: Uuid) -> RepositoryError {
    RepositoryError::ForeignKey(format!(
        "order {order_id} does not exist or has been deleted"
    ))
}

#[async_trait]
impl OrderItemCommandRepositoryTrait for OrderItemCommandRepository {
    async fn create_order_item(
        &self,
        ctx: &RequestContext,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError> {
        const OP: &str = "order_item.create";
        let id = item.id();

        ctx.run(OP, async {
            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let live = live_order_ids(&mut *tx, &[item.order_id])
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;
            if live.is_empty() {
                error!("❌ Order {} is not active, rejecting item {}", item.order_id, id);
                return Err(missing_order(item.order_id));
            }

            let result = insert_order_item(&mut *tx, item).await.map_err(|err| {
                error!(
                    "❌ Failed to create order item for order {}: {:?}",
                    item.order_id, err
                );
                RepositoryError::store(OP, Some(id))(err)
            })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            info!(
                "✅ Created order item {} for order {}",
                result.id(),
                result.order_id
            );
            Ok(result)
        })
        .await
    }

    async fn create_batch(
        &self,
        ctx: &RequestContext,
        items: &[OrderItemModel],
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        const OP: &str = "order_item.create_batch";

        ctx.run(OP, async {
            if items.is_empty() {
                return Ok(Vec::new());
            }

            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, None))?;

            let mut order_ids: Vec<Uuid> = items.iter().map(|item| item.order_id).collect();
            order_ids.sort();
            order_ids.dedup();

            let live = live_order_ids(&mut *tx, &order_ids)
                .await
                .map_err(RepositoryError::store(OP, None))?;
            if let Some(missing) = order_ids.iter().find(|id| !live.contains(id)) {
                error!("❌ Batch references inactive order {}, nothing written", missing);
                return Err(missing_order(*missing));
            }

            let mut created = Vec::with_capacity(items.len());
            for item in items {
                let row = insert_order_item(&mut *tx, item).await.map_err(|err| {
                    error!(
                        "❌ Failed to insert batch item {}, rolling back: {:?}",
                        item.id(),
                        err
                    );
                    RepositoryError::store(OP, Some(item.id()))(err)
                })?;
                created.push(row);
            }

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, None))?;

            info!("✅ Created batch of {} order item(s)", created.len());
            Ok(created)
        })
        .await
    }

    async fn update_order_item(
        &self,
        ctx: &RequestContext,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError> {
        const OP: &str = "order_item.update";
        let id = item.id();

        ctx.run(OP, async {
            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let existing = sqlx::query_scalar::<_, Uuid>(
                r#"
                SELECT id
                FROM order_items
                WHERE id = $1 AND deleted_at IS NULL
                FOR UPDATE
                "#,
            )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::store(OP, Some(id)))?;
            if existing.is_none() {
                return Err(RepositoryError::not_found("order item", id));
            }

            let live = live_order_ids(&mut *tx, &[item.order_id])
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;
            if live.is_empty() {
                return Err(missing_order(item.order_id));
            }

            let result = sqlx::query_as::<_, OrderItemModel>(
                r#"
                UPDATE order_items
                SET order_id   = $2,
                    product_id = $3,
                    quantity   = $4,
                    price      = $5,
                    updated_at = GREATEST($6, updated_at)
                WHERE id = $1
                RETURNING id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at
                "#,
            )
            .bind(id)
            .bind(item.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .bind(item.base.updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to update order item {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            info!("🔄 Updated order item {}", id);
            Ok(result)
        })
        .await
    }

    async fn delete_order_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        const OP: &str = "order_item.delete";
        info!("🗑️ Soft deleting order item {}", id);

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let result = sqlx::query(
                r#"
                UPDATE order_items
                SET deleted_at = $2
                WHERE id = $1 AND deleted_at IS NULL
                "#,
            )
            .bind(id)
            .bind(Utc::now())
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to soft delete order item {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::not_found("order item", id));
            }

            Ok(())
        })
        .await
    }

    async fn hard_delete_order_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        const OP: &str = "order_item.hard_delete";
        info!("❌ Hard deleting order item {}", id);

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let result = sqlx::query(
                r#"
                DELETE FROM order_items
                WHERE id = $1
                "#,
            )
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to hard delete order item {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::not_found("order item", id));
            }

            Ok(())
        })
        .await
    }

    async fn delete_by_order_id(
        &self,
        ctx: &RequestContext,
        order_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        const OP: &str = "order_item.delete_by_order_id";

        ctx.run(OP, async {
            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, Some(order_id)))?;

            let affected = soft_delete_by_order(&mut *tx, order_id, Utc::now())
                .await
                .map_err(|err| {
                    error!(
                        "❌ Failed to soft delete items of order {}: {:?}",
                        order_id, err
                    );
                    RepositoryError::store(OP, Some(order_id))(err)
                })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, Some(order_id)))?;

            info!("🗑️ Soft deleted {} item(s) of order {}", affected, order_id);
            Ok(affected)
        })
        .await
    }
}
