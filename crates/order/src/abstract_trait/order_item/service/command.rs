use crate::domain::{
    requests::order_item::{
        CreateOrderItemBatchCommand, CreateOrderItemCommand, DeleteOrderItemCommand,
        DeleteOrderItemsByOrderCommand, UpdateOrderItemCommand,
    },
    response::{api::ApiResponse, order_item::OrderItemResponse},
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderItemCommandService = Arc<dyn OrderItemCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemCommandServiceTrait {
    async fn create_order_item(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderItemCommand,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;

    async fn create_batch(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderItemBatchCommand,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError>;

    async fn update_order_item(
        &self,
        ctx: &RequestContext,
        req: &UpdateOrderItemCommand,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;

    async fn delete_order_item(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderItemCommand,
    ) -> Result<ApiResponse<()>, ServiceError>;

    async fn hard_delete_order_item(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderItemCommand,
    ) -> Result<ApiResponse<()>, ServiceError>;

    async fn delete_by_order(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderItemsByOrderCommand,
    ) -> Result<ApiResponse<u64>, ServiceError>;
}
