use crate::domain::{
    requests::order::{
        GetAllOrdersQuery, GetOrderByIdQuery, ListOrdersByCustomerQuery, ListOrdersByStatusQuery,
        ListOrdersQuery, SearchOrdersQuery,
    },
    response::{
        api::{ApiResponse, ListResponse},
        order::{OrderResponse, OrderWithItemsResponse},
    },
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        req: &GetOrderByIdQuery,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_with_items(
        &self,
        ctx: &RequestContext,
        req: &GetOrderByIdQuery,
    ) -> Result<ApiResponse<OrderWithItemsResponse>, ServiceError>;
    async fn list_orders(
        &self,
        ctx: &RequestContext,
        req: &ListOrdersQuery,
    ) -> Result<ApiResponse<ListResponse<OrderResponse>>, ServiceError>;
    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &GetAllOrdersQuery,
    ) -> Result<ApiResponse<ListResponse<OrderResponse>>, ServiceError>;
    async fn search_orders(
        &self,
        ctx: &RequestContext,
        req: &SearchOrdersQuery,
    ) -> Result<ApiResponse<ListResponse<OrderResponse>>, ServiceError>;
    async fn find_by_status(
        &self,
        ctx: &RequestContext,
        req: &ListOrdersByStatusQuery,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_customer(
        &self,
        ctx: &RequestContext,
        req: &ListOrdersByCustomerQuery,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}
