//! Process-local store backing the same repository contracts as Postgres.
//!
//! Both tables live behind one lock, so every mutation (cascades and batches
//! included) is applied under a single write guard and is never observed
//! half-done.

use crate::{
    abstract_trait::{
        order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        order_item::repository::{OrderItemCommandRepositoryTrait, OrderItemQueryRepositoryTrait},
    },
    domain::requests::{
        order::{FindAllOrders, OrderSortField},
        order_item::{FindAllOrderItems, OrderItemSortField},
        pagination::SortDirection,
    },
    model::{order::Order as OrderModel, order_item::OrderItem as OrderItemModel},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{context::RequestContext, errors::RepositoryError};
use std::{cmp::Ordering, collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    orders: HashMap<Uuid, OrderModel>,
    order_items: HashMap<Uuid, OrderItemModel>,
}

impl Tables {
    fn live_order(&self, id: Uuid) -> Option<&OrderModel> {
        self.orders.get(&id).filter(|order| !order.is_deleted())
    }

    fn live_item(&self, id: Uuid) -> Option<&OrderItemModel> {
        self.order_items.get(&id).filter(|item| !item.is_deleted())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_repository(&self) -> MemoryOrderRepository {
        MemoryOrderRepository {
            store: self.clone(),
        }
    }

    pub fn order_item_repository(&self) -> MemoryOrderItemRepository {
        MemoryOrderItemRepository {
            store: self.clone(),
        }
    }

    /// Raw row lookup that ignores the soft-delete filter.
    pub async fn stored_order(&self, id: Uuid) -> Option<OrderModel> {
        self.tables.read().await.orders.get(&id).cloned()
    }

    /// Every stored item of the order, trashed rows included.
    pub async fn stored_order_items(&self, order_id: Uuid) -> Vec<OrderItemModel> {
        self.tables
            .read()
            .await
            .order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect()
    }
}

fn missing_order(order_id: Uuid) -> RepositoryError {
    RepositoryError::ForeignKey(format!(
        "order {order_id} does not exist or has been deleted"
    ))
}

fn directed(ordering: Ordering, dir: SortDirection) -> Ordering {
    match dir {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn compare_orders(a: &OrderModel, b: &OrderModel, field: OrderSortField, dir: SortDirection) -> Ordering {
    let primary = match field {
        OrderSortField::CreatedAt => a.base.created_at.cmp(&b.base.created_at),
        OrderSortField::UpdatedAt => a.base.updated_at.cmp(&b.base.updated_at),
        OrderSortField::Total => a.total.cmp(&b.total),
        OrderSortField::Status => a.status.cmp(&b.status),
    };

    directed(primary, dir).then_with(|| a.id().cmp(&b.id()))
}

fn compare_items(
    a: &OrderItemModel,
    b: &OrderItemModel,
    field: OrderItemSortField,
    dir: SortDirection,
) -> Ordering {
    let primary = match field {
        OrderItemSortField::CreatedAt => a.base.created_at.cmp(&b.base.created_at),
        OrderItemSortField::UpdatedAt => a.base.updated_at.cmp(&b.base.updated_at),
        OrderItemSortField::Quantity => a.quantity.cmp(&b.quantity),
        OrderItemSortField::Price => a.price.cmp(&b.price),
    };

    directed(primary, dir).then_with(|| a.id().cmp(&b.id()))
}

fn newest_first<T>(rows: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<Utc>, Uuid)) {
    rows.sort_by(|a, b| {
        let (a_at, a_id) = key(a);
        let (b_at, b_id) = key(b);
        b_at.cmp(&a_at).then_with(|| a_id.cmp(&b_id))
    });
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn page<T>(rows: Vec<T>, offset: i64, limit: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    rows.into_iter().skip(offset).take(limit).collect()
}

#[derive(Debug, Clone)]
pub struct MemoryOrderRepository {
    store: MemoryStore,
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryOrderRepository {
    async fn create_order(
        &self,
        ctx: &RequestContext,
        order: &OrderModel,
    ) -> Result<OrderModel, RepositoryError> {
        const OP: &str = "order.create";

        ctx.run(OP, async {
            let mut tables = self.store.tables.write().await;
            if tables.orders.contains_key(&order.id()) {
                return Err(RepositoryError::duplicate(OP, order.id()));
            }

            let mut stored = order.clone();
            stored.items.clear();
            tables.orders.insert(stored.id(), stored.clone());

            info!("✅ Created order {} for customer {}", stored.id(), stored.customer_id);
            Ok(stored)
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
            let mut tables = self.store.tables.write().await;
            let stored = tables
                .orders
                .get_mut(&id)
                .filter(|stored| !stored.is_deleted())
                .ok_or_else(|| RepositoryError::not_found("order", id))?;

            stored.customer_id = order.customer_id;
            stored.total = order.total;
            stored.status = order.status.clone();
            stored.base.updated_at = order.base.updated_at.max(stored.base.updated_at);

            info!("🔄 Updated order {}", id);
            Ok(stored.clone())
        })
        .await
    }

    async fn delete_order(&self, ctx: &RequestContext, id: Uuid) -> Result<(), RepositoryError> {
        const OP: &str = "order.delete";

        ctx.run(OP, async {
            let mut tables = self.store.tables.write().await;
            if tables.live_order(id).is_none() {
                return Err(RepositoryError::not_found("order", id));
            }

            let deleted_at = Utc::now();
            let mut items = 0;
            for item in tables
                .order_items
                .values_mut()
                .filter(|item| item.order_id == id && !item.is_deleted())
            {
                item.base.mark_deleted(deleted_at);
                items += 1;
            }
            if let Some(order) = tables.orders.get_mut(&id) {
                order.base.mark_deleted(deleted_at);
            }

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

        ctx.run(OP, async {
            let mut tables = self.store.tables.write().await;
            if tables.orders.remove(&id).is_none() {
                return Err(RepositoryError::not_found("order", id));
            }

            let before = tables.order_items.len();
            tables.order_items.retain(|_, item| item.order_id != id);

            info!(
                "✅ Hard deleted order {} with {} item(s)",
                id,
                before - tables.order_items.len()
            );
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryOrderRepository {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderModel, RepositoryError> {
        ctx.run("order.find_by_id", async {
            let tables = self.store.tables.read().await;
            tables
                .live_order(id)
                .cloned()
                .ok_or_else(|| RepositoryError::not_found("order", id))
        })
        .await
    }

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &FindAllOrders,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError> {
        ctx.run("order.find_all", async {
            let tables = self.store.tables.read().await;
            let mut rows: Vec<OrderModel> = tables
                .orders
                .values()
                .filter(|order| !order.is_deleted())
                .filter(|order| match req.search.as_deref() {
                    Some(term) => {
                        matches(&order.status, term)
                            || matches(&order.customer_id.to_string(), term)
                    }
                    None => true,
                })
                .cloned()
                .collect();

            rows.sort_by(|a, b| compare_orders(a, b, req.sort_by, req.sort_dir));
            let total = rows.len() as i64;

            Ok((page(rows, req.offset, req.limit), total))
        })
        .await
    }

    async fn find_by_status(
        &self,
        ctx: &RequestContext,
        status: &str,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        ctx.run("order.find_by_status", async {
            let tables = self.store.tables.read().await;
            let mut rows: Vec<OrderModel> = tables
                .orders
                .values()
                .filter(|order| !order.is_deleted() && order.status == status)
                .cloned()
                .collect();

            newest_first(&mut rows, |order| (order.base.created_at, order.id()));
            Ok(rows)
        })
        .await
    }

    async fn find_by_customer_id(
        &self,
        ctx: &RequestContext,
        customer_id: Uuid,
    ) -> Result<Vec<OrderModel>, RepositoryError> {
        ctx.run("order.find_by_customer_id", async {
            let tables = self.store.tables.read().await;
            let mut rows: Vec<OrderModel> = tables
                .orders
                .values()
                .filter(|order| !order.is_deleted() && order.customer_id == customer_id)
                .cloned()
                .collect();

            newest_first(&mut rows, |order| (order.base.created_at, order.id()));
            Ok(rows)
        })
        .await
    }

    async fn find_with_items(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderModel, RepositoryError> {
        ctx.run("order.find_with_items", async {
            let tables = self.store.tables.read().await;
            let mut order = tables
                .live_order(id)
                .cloned()
                .ok_or_else(|| RepositoryError::not_found("order", id))?;

            let mut items: Vec<OrderItemModel> = tables
                .order_items
                .values()
                .filter(|item| item.order_id == id && !item.is_deleted())
                .cloned()
                .collect();
            items.sort_by(|a, b| {
                a.base
                    .created_at
                    .cmp(&b.base.created_at)
                    .then_with(|| a.id().cmp(&b.id()))
            });

            order.items = items;
            Ok(order)
        })
        .await
    }
}

#[derive(Debug, Clone)]
pub struct MemoryOrderItemRepository {
    store: MemoryStore,
}

#[async_trait]
impl OrderItemCommandRepositoryTrait for MemoryOrderItemRepository {
    async fn create_order_item(
        &self,
        ctx: &RequestContext,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError> {
        const OP: &str = "order_item.create";

        ctx.run(OP, async {
            let mut tables = self.store.tables.write().await;
            if tables.live_order(item.order_id).is_none() {
                return Err(missing_order(item.order_id));
            }
            if tables.order_items.contains_key(&item.id()) {
                return Err(RepositoryError::duplicate(OP, item.id()));
            }

            tables.order_items.insert(item.id(), item.clone());

            info!("✅ Created order item {} for order {}", item.id(), item.order_id);
            Ok(item.clone())
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

            let mut tables = self.store.tables.write().await;

            // validate everything before touching the table
            for (index, item) in items.iter().enumerate() {
                if tables.live_order(item.order_id).is_none() {
                    return Err(missing_order(item.order_id));
                }
                let repeated = items[..index].iter().any(|prev| prev.id() == item.id());
                if repeated || tables.order_items.contains_key(&item.id()) {
                    return Err(RepositoryError::duplicate(OP, item.id()));
                }
            }

            for item in items {
                tables.order_items.insert(item.id(), item.clone());
            }

            info!("✅ Created batch of {} order item(s)", items.len());
            Ok(items.to_vec())
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
            let mut tables = self.store.tables.write().await;
            if tables.live_item(id).is_none() {
                return Err(RepositoryError::not_found("order item", id));
            }
            if tables.live_order(item.order_id).is_none() {
                return Err(missing_order(item.order_id));
            }

            let stored = tables
                .order_items
                .get_mut(&id)
                .ok_or_else(|| RepositoryError::not_found("order item", id))?;
            stored.order_id = item.order_id;
            stored.product_id = item.product_id;
            stored.quantity = item.quantity;
            stored.price = item.price;
            stored.base.updated_at = item.base.updated_at.max(stored.base.updated_at);

            info!("🔄 Updated order item {}", id);
            Ok(stored.clone())
        })
        .await
    }

    async fn delete_order_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        ctx.run("order_item.delete", async {
            let mut tables = self.store.tables.write().await;
            let stored = tables
                .order_items
                .get_mut(&id)
                .filter(|item| !item.is_deleted())
                .ok_or_else(|| RepositoryError::not_found("order item", id))?;

            stored.base.mark_deleted(Utc::now());
            Ok(())
        })
        .await
    }

    async fn hard_delete_order_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        ctx.run("order_item.hard_delete", async {
            let mut tables = self.store.tables.write().await;
            tables
                .order_items
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| RepositoryError::not_found("order item", id))
        })
        .await
    }

    async fn delete_by_order_id(
        &self,
        ctx: &RequestContext,
        order_id: Uuid,
    ) -> Result<u64, RepositoryError> {
        ctx.run("order_item.delete_by_order_id", async {
            let mut tables = self.store.tables.write().await;
            let deleted_at = Utc::now();
            let mut affected = 0;

            for item in tables
                .order_items
                .values_mut()
                .filter(|item| item.order_id == order_id && !item.is_deleted())
            {
                item.base.mark_deleted(deleted_at);
                affected += 1;
            }

            info!("🗑️ Soft deleted {} item(s) of order {}", affected, order_id);
            Ok(affected)
        })
        .await
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for MemoryOrderItemRepository {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderItemModel, RepositoryError> {
        ctx.run("order_item.find_by_id", async {
            let tables = self.store.tables.read().await;
            tables
                .live_item(id)
                .cloned()
                .ok_or_else(|| RepositoryError::not_found("order item", id))
        })
        .await
    }

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &FindAllOrderItems,
    ) -> Result<(Vec<OrderItemModel>, i64), RepositoryError> {
        ctx.run("order_item.find_all", async {
            let tables = self.store.tables.read().await;
            let mut rows: Vec<OrderItemModel> = tables
                .order_items
                .values()
                .filter(|item| !item.is_deleted())
                .filter(|item| match req.search.as_deref() {
                    Some(term) => {
                        matches(&item.product_id.to_string(), term)
                            || matches(&item.order_id.to_string(), term)
                    }
                    None => true,
                })
                .cloned()
                .collect();

            rows.sort_by(|a, b| compare_items(a, b, req.sort_by, req.sort_dir));
            let total = rows.len() as i64;

            Ok((page(rows, req.offset, req.limit), total))
        })
        .await
    }

    async fn find_by_order_id(
        &self,
        ctx: &RequestContext,
        order_id: Uuid,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        ctx.run("order_item.find_by_order_id", async {
            let tables = self.store.tables.read().await;
            let mut rows: Vec<OrderItemModel> = tables
                .order_items
                .values()
                .filter(|item| !item.is_deleted() && item.order_id == order_id)
                .cloned()
                .collect();

            newest_first(&mut rows, |item| (item.base.created_at, item.id()));
            Ok(rows)
        })
        .await
    }

    async fn find_by_product_id(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        ctx.run("order_item.find_by_product_id", async {
            let tables = self.store.tables.read().await;
            let mut rows: Vec<OrderItemModel> = tables
                .order_items
                .values()
                .filter(|item| !item.is_deleted() && item.product_id == product_id)
                .cloned()
                .collect();

            newest_first(&mut rows, |item| (item.base.created_at, item.id()));
            Ok(rows)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn order() -> OrderModel {
        OrderModel::new(Uuid::now_v7(), Decimal::new(5000, 2), "pending")
    }

    #[tokio::test]
    async fn soft_delete_retains_rows_in_storage() {
        let store = MemoryStore::new();
        let orders = store.order_repository();
        let items = store.order_item_repository();
        let ctx = RequestContext::background();

        let created = orders.create_order(&ctx, &order()).await.unwrap();
        let item = OrderItemModel::new(created.id(), Uuid::now_v7(), 1, Decimal::new(5000, 2));
        items.create_order_item(&ctx, &item).await.unwrap();

        orders.delete_order(&ctx, created.id()).await.unwrap();

        let stored = store.stored_order(created.id()).await.unwrap();
        assert!(stored.is_deleted());
        let stored_items = store.stored_order_items(created.id()).await;
        assert_eq!(stored_items.len(), 1);
        assert_eq!(stored_items[0].base.deleted_at, stored.base.deleted_at);
    }

    #[tokio::test]
    async fn soft_deleting_twice_reports_not_found() {
        let store = MemoryStore::new();
        let orders = store.order_repository();
        let ctx = RequestContext::background();

        let created = orders.create_order(&ctx, &order()).await.unwrap();
        orders.delete_order(&ctx, created.id()).await.unwrap();

        let err = orders.delete_order(&ctx, created.id()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn hard_delete_removes_trashed_order() {
        let store = MemoryStore::new();
        let orders = store.order_repository();
        let ctx = RequestContext::background();

        let created = orders.create_order(&ctx, &order()).await.unwrap();
        orders.delete_order(&ctx, created.id()).await.unwrap();
        orders.hard_delete_order(&ctx, created.id()).await.unwrap();

        assert!(store.stored_order(created.id()).await.is_none());
    }

    #[tokio::test]
    async fn listing_breaks_ties_by_id() {
        let store = MemoryStore::new();
        let orders = store.order_repository();
        let ctx = RequestContext::background();

        let mut first = order();
        let mut second = order();
        second.base.created_at = first.base.created_at;
        second.base.updated_at = first.base.updated_at;
        if first.id() > second.id() {
            std::mem::swap(&mut first, &mut second);
        }
        orders.create_order(&ctx, &second).await.unwrap();
        orders.create_order(&ctx, &first).await.unwrap();

        let (rows, total) = orders.find_all(&ctx, &FindAllOrders::default()).await.unwrap();

        assert_eq!(total, 2);
        assert_eq!(rows[0].id(), first.id());
        assert_eq!(rows[1].id(), second.id());
    }

    #[tokio::test]
    async fn creating_the_same_order_twice_conflicts() {
        let store = MemoryStore::new();
        let orders = store.order_repository();
        let ctx = RequestContext::background();

        let order = order();
        orders.create_order(&ctx, &order).await.unwrap();
        let err = orders.create_order(&ctx, &order).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn repeated_id_in_batch_conflicts() {
        let store = MemoryStore::new();
        let orders = store.order_repository();
        let items = store.order_item_repository();
        let ctx = RequestContext::background();

        let created = orders.create_order(&ctx, &order()).await.unwrap();
        let item = OrderItemModel::new(created.id(), Uuid::now_v7(), 1, Decimal::ONE);
        let err = items
            .create_batch(&ctx, &[item.clone(), item])
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert!(store.stored_order_items(created.id()).await.is_empty());
    }

    #[tokio::test]
    async fn empty_batch_on_cancelled_context_is_cancelled() {
        let store = MemoryStore::new();
        let items = store.order_item_repository();
        let (ctx, handle) = RequestContext::with_cancel();
        handle.cancel();

        let err = items.create_batch(&ctx, &[]).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Cancelled { .. }));
    }
}
