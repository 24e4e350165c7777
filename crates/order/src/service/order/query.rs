use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::{
        requests::order::{
            FindAllOrders, GetAllOrdersQuery, GetOrderByIdQuery, ListOrdersByCustomerQuery,
            ListOrdersByStatusQuery, ListOrdersQuery, SearchOrdersQuery,
        },
        response::{
            api::{ApiResponse, ListResponse},
            order::{OrderResponse, OrderWithItemsResponse},
        },
    },
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }

    async fn page(
        &self,
        ctx: &RequestContext,
        find: FindAllOrders,
    ) -> Result<ApiResponse<ListResponse<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(ctx, &find).await.map_err(|e| {
            error!("❌ Failed to list orders: {e}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse::success(
            "Orders retrieved successfully",
            ListResponse::new(
                OrderResponse::from_orders(orders),
                total,
                find.offset,
                find.limit,
            ),
        ))
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        req: &GetOrderByIdQuery,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        req.validate()?;

        let order = self.query.find_by_id(ctx, req.id).await?;

        Ok(ApiResponse::success(
            "Order retrieved successfully",
            OrderResponse::from(order),
        ))
    }

    async fn find_with_items(
        &self,
        ctx: &RequestContext,
        req: &GetOrderByIdQuery,
    ) -> Result<ApiResponse<OrderWithItemsResponse>, ServiceError> {
        req.validate()?;

        let order = self.query.find_with_items(ctx, req.id).await?;
        info!("📦 Order {} has {} active item(s)", req.id, order.items.len());

        Ok(ApiResponse::success(
            "Order with items retrieved successfully",
            OrderWithItemsResponse::from(order),
        ))
    }

    async fn list_orders(
        &self,
        ctx: &RequestContext,
        req: &ListOrdersQuery,
    ) -> Result<ApiResponse<ListResponse<OrderResponse>>, ServiceError> {
        let mut req = req.clone();
        req.normalize();

        info!(
            "🔍 Listing orders | page: {}, page_size: {}, sort: {} {}",
            req.page, req.page_size, req.sort_by, req.sort_dir
        );

        self.page(ctx, req.to_find_all()).await
    }

    async fn find_all(
        &self,
        ctx: &RequestContext,
        req: &GetAllOrdersQuery,
    ) -> Result<ApiResponse<ListResponse<OrderResponse>>, ServiceError> {
        let mut req = req.clone();
        req.normalize();

        self.page(ctx, req.to_find_all()).await
    }

    async fn search_orders(
        &self,
        ctx: &RequestContext,
        req: &SearchOrdersQuery,
    ) -> Result<ApiResponse<ListResponse<OrderResponse>>, ServiceError> {
        let mut req = req.clone();
        req.normalize();

        info!("🔍 Searching orders for {:?}", req.query);

        self.page(ctx, req.to_find_all()).await
    }

    async fn find_by_status(
        &self,
        ctx: &RequestContext,
        req: &ListOrdersByStatusQuery,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        req.validate()?;

        let orders = self.query.find_by_status(ctx, &req.status).await?;

        Ok(ApiResponse::success(
            "Orders retrieved successfully",
            OrderResponse::from_orders(orders),
        ))
    }

    async fn find_by_customer(
        &self,
        ctx: &RequestContext,
        req: &ListOrdersByCustomerQuery,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        req.validate()?;

        let orders = self
            .query
            .find_by_customer_id(ctx, req.customer_id)
            .await?;

        Ok(ApiResponse::success(
            "Orders retrieved successfully",
            OrderResponse::from_orders(orders),
        ))
    }
}
