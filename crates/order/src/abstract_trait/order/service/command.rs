use crate::domain::{
    requests::order::{CreateOrderCommand, DeleteOrderCommand, UpdateOrderCommand},
    response::{api::ApiResponse, order::OrderResponse},
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderCommand,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        ctx: &RequestContext,
        req: &UpdateOrderCommand,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderCommand,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn hard_delete_order(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderCommand,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
