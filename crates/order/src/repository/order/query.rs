use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    domain::requests::order::FindAllOrders,
    model::{order::Order as OrderModel, order_item::OrderItem as OrderItemModel},
    repository::like_pattern,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, context::RequestContext, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderModel, RepositoryError> {
        const OP: &str = "order.find_by_id";

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let order = sqlx::query_as::<_, OrderModel>(
                r#"
                SELECT id, customer_id, total, status, created_at, updated_at, deleted_at
                FROM orders
                WHERE id = $1 AND deleted_at IS NULL
                "#,
            )
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch order {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?
            .ok_or_else(|| RepositoryError::not_found("order", id))?;

            Ok(order)
        })
        .await
    }

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &FindAllOrders,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError> {
        const OP: &str = "order.find_all";
        info!(
            "🔍 Listing orders | offset: {}, limit: {}, search: {:?}",
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

            // sort column and direction come from closed enums, never from raw input
            let sql = format!(
                r#"
                SELECT id, customer_id, total, status, created_at, updated_at, deleted_at
                FROM orders
                WHERE deleted_at IS NULL
                  AND ($1::TEXT IS NULL
                       OR status ILIKE $1 ESCAPE '\'
                       OR customer_id::TEXT ILIKE $1 ESCAPE '\')
                ORDER BY {} {}, id ASC
                LIMIT $2 OFFSET $3
                "#,
                req.sort_by.column(),
                req.sort_dir.as_sql()
            );

            let orders = sqlx::query_as::<_, OrderModel>(&sql)
                .bind(search.as_deref())
                .bind(req.limit)
                .bind(req.offset)
                .fetch_all(&mut *tx)
                .await
                .map_err(|err| {
                    error!("❌ Failed to list orders: {:?}", err);
                    RepositoryError::store(OP, None)(err)
                })?;

            let total = sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*)
                FROM orders
                WHERE deleted_at IS NULL
                  AND ($1::TEXT IS NULL
                       OR status ILIKE $1 ESCAPE '\'
                       OR customer_id::TEXT ILIKE $1 ESCAPE '\')
                "#,
            )
            .bind(search.as_deref())
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to count orders: {:?}", err);
                RepositoryError::store(OP, None)(err)
            })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, None))?;

            info!("✅ Found {} orders (total: {})", orders.len(), total);
            Ok((orders, total))
        })
        .await
    }

    async fn find_by_status(
        &self,
        ctx: &RequestContext,
        status: &str,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        const OP: &str = "order.find_by_status";

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, None))?;

            let orders = sqlx::query_as::<_, OrderModel>(
                r#"
                SELECT id, customer_id, total, status, created_at, updated_at, deleted_at
                FROM orders
                WHERE status = $1 AND deleted_at IS NULL
                ORDER BY created_at DESC, id ASC
                "#,
            )
            .bind(status)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch orders with status {}: {:?}", status, err);
                RepositoryError::store(OP, None)(err)
            })?;

            Ok(orders)
        })
        .await
    }

    async fn find_by_customer_id(
        &self,
        ctx: &RequestContext,
        customer_id: Uuid,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        const OP: &str = "order.find_by_customer_id";

        ctx.run(OP, async {
            let mut conn = self
                .db
                .acquire()
                .await
                .map_err(RepositoryError::store(OP, Some(customer_id)))?;

            let orders = sqlx::query_as::<_, OrderModel>(
                r#"
                SELECT id, customer_id, total, status, created_at, updated_at, deleted_at
                FROM orders
                WHERE customer_id = $1 AND deleted_at IS NULL
                ORDER BY created_at DESC, id ASC
                "#,
            )
            .bind(customer_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to fetch orders for customer {}: {:?}",
                    customer_id, err
                );
                RepositoryError::store(OP, Some(customer_id))(err)
            })?;

            Ok(orders)
        })
        .await
    }

    async fn find_with_items(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderModel, RepositoryError> {
        const OP: &str = "order.find_with_items";

        ctx.run(OP, async {
            let mut tx = self
                .db
                .begin()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            // both reads must observe the same snapshot
            sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
                .execute(&mut *tx)
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            let mut order = sqlx::query_as::<_, OrderModel>(
                r#"
                SELECT id, customer_id, total, status, created_at, updated_at, deleted_at
                FROM orders
                WHERE id = $1 AND deleted_at IS NULL
                "#,
            )
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch order {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?
            .ok_or_else(|| RepositoryError::not_found("order", id))?;

            order.items = sqlx::query_as::<_, OrderItemModel>(
                r#"
                SELECT id, order_id, product_id, quantity, price, created_at, updated_at, deleted_at
                FROM order_items
                WHERE order_id = $1 AND deleted_at IS NULL
                ORDER BY created_at ASC, id ASC
                "#,
            )
            .bind(id)
            .fetch_all(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch items of order {}: {:?}", id, err);
                RepositoryError::store(OP, Some(id))(err)
            })?;

            tx.commit()
                .await
                .map_err(RepositoryError::store(OP, Some(id)))?;

            info!("📦 Loaded order {} with {} item(s)", id, order.items.len());
            Ok(order)
        })
        .await
    }
}
