use crate::model::order_item::OrderItem as OrderItemModel;
use async_trait::async_trait;
use shared::{context::RequestContext, errors::RepositoryError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderItemCommandRepository = Arc<dyn OrderItemCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemCommandRepositoryTrait {
    async fn create_order_item(
        &self,
        ctx: &RequestContext,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError>;

    /// All items persist or none do.
    async fn create_batch(
        &self,
        ctx: &RequestContext,
        items: &[OrderItemModel],
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;

    async fn update_order_item(
        &self,
        ctx: &RequestContext,
        item: &OrderItemModel,
    ) -> Result<OrderItemModel, RepositoryError>;

    async fn delete_order_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError>;

    async fn hard_delete_order_item(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError>;

    /// Soft-deletes every active item of the order, returning how many were touched.
    async fn delete_by_order_id(
        &self,
        ctx: &RequestContext,
        order_id: Uuid,
    ) -> Result<u64, RepositoryError>;
}
