use crate::{domain::requests::order::FindAllOrders, model::order::Order as OrderModel};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::RepositoryError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, ctx: &RequestContext, id: Uuid)
    -> Result<OrderModel, RepositoryError>;

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &FindAllOrders,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError>;

    async fn find_by_status(
        &self,
        ctx: &RequestContext,
        status: &str,
    ) -> Result<Vec<OrderModel>, RepositoryError>;

    async fn find_by_customer_id(
        &self,
        ctx: &RequestContext,
        customer_id: Uuid,
    ) -> Result<Vec<OrderModel>, RepositoryError>;

    async fn find_with_items(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<OrderModel, RepositoryError>;
}
