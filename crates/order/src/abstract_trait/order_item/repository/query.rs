use crate::{
    domain::requests::order_item::FindAllOrderItems, model::order_item::OrderItem as OrderItemModel,
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::RepositoryError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderItemQueryRepository = Arc<dyn OrderItemQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemQueryRepositoryTrait {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderItemModel, RepositoryError>;

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &FindAllOrderItems,
    ) -> Result<(Vec<OrderItemModel>, i64), RepositoryError>;

    async fn find_by_order_id(
        &self,
        ctx: &RequestContext,
        order_id: Uuid,
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;

    async fn find_by_product_id(
        &self,
        ctx: &RequestContext,
        product_id: Uuid,
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;
}
