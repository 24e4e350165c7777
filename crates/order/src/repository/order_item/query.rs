use crate::{
    abstract_trait::order_item::repository::OrderItemQueryRepositoryTrait,
    domain::requests::order_item::FindAllOrderItems,
    model::order_item::OrderItem as OrderItemModel,
    repository::like_pattern,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, context::RequestContext, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderItemQueryRepository {
    db: ConnectionPool,
}

impl OrderItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for OrderItemQueryRepository {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderItemModel, RepositoryError> {
        const OP: &str = "order_item.find_by_id";

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let item = sqlx::query_as::<_, OrderItemModel>(
                r#"
                SELECT id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at
                FROM order_items
                WHERE id = $1 AND deleted_at IS NULL
                "#,
            )
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch order item {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?
            .ok_or_else(|| RepositoryError::not_found("order item", id))?;

            Ok(item)
        })
        .await
    }

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &FindAllOrderItems,
    ) -> Result<(Vec<OrderItemModel>, i64), RepositoryError> {
        const OP: &str = "order_item.find_all";
        info!(
            "🔍 Listing order items | offset: {}, limit: {}, search: {:?}",
            req.offset, req.limit, req.search
        );

        ctx.run(OP, async {
            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, None))?;

            // page and total come from the same snapshot
            sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
                .execute(&mut *tx)
                .await
                .map_err(RepositoryError::store(OP, None))?;

            let search = req.search.as_deref().map(like_pattern);

            let sql = format!(
                r#"
                SELECT id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at
                FROM order_items
                WHERE deleted_at IS NULL
                  AND ($1::TEXT IS NULL
                       OR product_id::TEXT ILIKE $1 ESCAPE '\'
                       OR order_id::TEXT ILIKE $1 ESCAPE '\')
                ORDER BY {} {}, id ASC
                LIMIT $2 OFFSET $3
                "#,
                req.sort_by.column(),
                req.sort_dir.as_sql()
            );

            let items = sqlx::query_as::<_, OrderItemModel>(&sql)
                .bind(search.as_deref())
                .bind(req.limit)
                .bind(req.offset)
                .fetch_all(&mut *tx)
                .await
                .map_err(|err| {
                    error!("❌ Failed to list order items: {:?}", err);
                    RepositoryError::store(OP, None)(err)
                })?;

            let total = sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM order_items
                WHERE deleted_at IS NULL
                  AND ($1::TEXT IS NULL
                       OR product_id::TEXT ILIKE $1 ESCAPE '\'
                       OR order_id::TEXT ILIKE $1 ESCAPE '\')
                "#,
            )
            .bind(search.as_deref())
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to count order items: {:?}", err);
                RepositoryError::store(OP, None)(err)
            })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, None))?;

            info!("✅ Found {} order items (total: {})", items.len(), total);
            Ok((items, total))
        })
        .await
    }

    async fn find_by_order_id(
        &self,
        ctx: &RequestContext,
        order_id: Uuid,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        const OP: &str = "order_item.find_by_order_id";
        info!("📦 Fetching order items for order {}", order_id);

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(order_id)))?;

            let items = sqlx::query_as::<_, OrderItemModel>(
                r#"
                SELECT id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at
                FROM order_items
                WHERE order_id = $1 AND deleted_at IS NULL
                ORDER BY created_at DESC, id ASC
                "#,
            )
            .bind(order_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to fetch order items for order {}: {:?}",
                    order_id, err
                );
                RepositoryError::store(OP, Some(order_id))(err)
            })?;

            Ok(items)
        })
        .await
    }

    async fn find_by_product_id(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        const OP: &str = "order_item.find_by_product_id";

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(product_id)))?;

            let items = sqlx::query_as::<_, OrderItemModel>(
                r#"
                SELECT id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at
                FROM order_items
                WHERE product_id = $1 AND deleted_at IS NULL
                ORDER BY created_at DESC, id ASC
                "#,
            )
            .bind(product_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to fetch order items for product {}: {:?}",
                    product_id, err
                );
                RepositoryError::store(OP, Some(product_id))(err)
            })?;

            Ok(items)
        })
        .await
    }
}
