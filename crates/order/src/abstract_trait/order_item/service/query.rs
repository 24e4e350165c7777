use crate::domain::{
    requests::order_item::{
        GetAllOrderItemsQuery, GetOrderItemByIdQuery, ListOrderItemsByOrderQuery,
        ListOrderItemsByProductQuery, ListOrderItemsQuery, SearchOrderItemsQuery,
    },
    response::{
        api::{ApiResponse, ListResponse},
        order_item::OrderItemResponse,
    },
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderItemQueryService = Arc<dyn OrderItemQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemQueryServiceTrait {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        req: &GetOrderItemByIdQuery,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError>;

    async fn list_order_items(
        &self,
        ctx: &RequestContext,
        req: &ListOrderItemsQuery,
    ) -> Result<ApiResponse<ListResponse<OrderItemResponse>>, ServiceError>;

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &GetAllOrderItemsQuery,
    ) -> Result<ApiResponse<ListResponse<OrderItemResponse>>, ServiceError>;

    async fn search_order_items(
        &self,
        ctx: &RequestContext,
        req: &SearchOrderItemsQuery,
    ) -> Result<ApiResponse<ListResponse<OrderItemResponse>>, ServiceError>;

    async fn find_by_order(
        &self,
        ctx: &RequestContext,
        req: &ListOrderItemsByOrderQuery,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError>;

    async fn find_by_product(
        &self,
        ctx: &RequestContext,
        req: &ListOrderItemsByProductQuery,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError>;
}
