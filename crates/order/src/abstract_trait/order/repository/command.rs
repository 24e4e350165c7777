use crate::model::order::Order as OrderModel;
use async_trait::async_trait;
use shared::{context::RequestContext, errors::RepositoryError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        ctx: &RequestContext,
        order: &OrderModel,
    ) -> Result<OrderModel, RepositoryError>;

    /// Replaces the mutable fields of an active order.
    async fn update_order(
        &self,
        ctx: &RequestContext,
        order: &OrderModel,
    ) -> Result<OrderModel, RepositoryError>;

    /// Soft-deletes the order and all of its active items in one unit of work.
    async fn delete_order(&self, ctx: &RequestContext, id: Uuid) -> Result<(), RepositoryError>;

    /// Physically removes the order, active or trashed, together with its items.
    async fn hard_delete_order(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<(), RepositoryError>;
}
