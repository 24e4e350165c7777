use crate::{
    abstract_trait::order_item::{
        repository::DynOrderItemQueryRepository, service::OrderItemQueryServiceTrait,
    },
    domain::{
        requests::order_item::{
            FindAllOrderItems, GetAllOrderItemsQuery, GetOrderItemByIdQuery,
            ListOrderItemsByOrderQuery, ListOrderItemsByProductQuery, ListOrderItemsQuery,
            SearchOrderItemsQuery,
        },
        response::{
            api::{ApiResponse, ListResponse},
            order_item::OrderItemResponse,
        },
    },
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct OrderItemQueryService {
    query: DynOrderItemQueryRepository,
}

impl OrderItemQueryService {
    pub fn new(query: DynOrderItemQueryRepository) -> Self {
        Self { query }
    }

    async fn page(
        &self,
        ctx: &RequestContext,
        find: FindAllOrderItems,
    ) -> Result<ApiResponse<ListResponse<OrderItemResponse>>, ServiceError> {
        let (items, total) = self.query.find_all(ctx, &find).await.map_err(|e| {
            error!("❌ Failed to list order items: {e}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse::success(
            "Order items retrieved successfully",
            ListResponse::new(
                OrderItemResponse::from_order_items(items),
                total,
                find.offset,
                find.limit,
            ),
        ))
    }
}

#[async_trait]
impl OrderItemQueryServiceTrait for OrderItemQueryService {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        req: &GetOrderItemByIdQuery,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        req.validate()?;

        let item = self.query.find_by_id(ctx, req.id).await?;

        Ok(ApiResponse::success(
            "Order item retrieved successfully",
            OrderItemResponse::from(item),
        ))
    }

    async fn list_order_items(
        &self,
        ctx: &RequestContext,
        req: &ListOrderItemsQuery,
    ) -> Result<ApiResponse<ListResponse<OrderItemResponse>>, ServiceError> {
        let mut req = req.clone();
        req.normalize();

        info!(
            "🔍 Listing order items | page: {}, page_size: {}, sort: {} {}",
            req.page, req.page_size, req.sort_by, req.sort_dir
        );

        self.page(ctx, req.to_find_all()).await
    }

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &GetAllOrderItemsQuery,
    ) -> Result<ApiResponse<ListResponse<OrderItemResponse>>, ServiceError> {
        let mut req = req.clone();
        req.normalize();

        self.page(ctx, req.to_find_all()).await
    }

    async fn search_order_items(
        &self,
        ctx: &RequestContext,
        req: &SearchOrderItemsQuery,
    ) -> Result<ApiResponse<ListResponse<OrderItemResponse>>, ServiceError> {
        let mut req = req.clone();
        req.normalize();

        self.page(ctx, req.to_find_all()).await
    }

    async fn find_by_order(
        &self,
        ctx: &RequestContext,
        req: &ListOrderItemsByOrderQuery,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError> {
        req.validate()?;

        let items = self.query.find_by_order_id(ctx, req.order_id).await?;

        Ok(ApiResponse::success(
            "Order items retrieved successfully",
            OrderItemResponse::from_order_items(items),
        ))
    }

    async fn find_by_product(
        &self,
        ctx: &RequestContext,
        req: &ListOrderItemsByProductQuery,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError> {
        req.validate()?;

        let items = self.query.find_by_product_id(ctx, req.product_id).await?;

        Ok(ApiResponse::success(
            "Order items retrieved successfully",
            OrderItemResponse::from_order_items(items),
        ))
    }
}
