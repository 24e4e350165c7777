use crate::{
    abstract_trait::order_item::{
        repository::{DynOrderItemCommandRepository, DynOrderItemQueryRepository},
        service::OrderItemCommandServiceTrait,
    },
    domain::{
        requests::order_item::{
            CreateOrderItemBatchCommand, CreateOrderItemCommand, DeleteOrderItemCommand,
            DeleteOrderItemsByOrderCommand, UpdateOrderItemCommand,
        },
        response::{api::ApiResponse, order_item::OrderItemResponse},
    },
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct OrderItemCommandService {
    command: DynOrderItemCommandRepository,
    query: DynOrderItemQueryRepository,
}

impl OrderItemCommandService {
    pub fn new(command: DynOrderItemCommandRepository, query: DynOrderItemQueryRepository) -> Self {
        Self { command, query }
    }
}

#[async_trait]
impl OrderItemCommandServiceTrait for OrderItemCommandService {
    async fn create_order_item(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderItemCommand,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        info!(
            "🏗️ Creating item for order {} (product {})",
            req.order_id, req.product_id
        );

        req.validate().map_err(|e| {
            error!("❌ Rejected create order item request: {e}");
            ServiceError::from(e)
        })?;

        let item = req.to_entity();
        item.validate()?;

        let created = self
            .command
            .create_order_item(ctx, &item)
            .await
            .map_err(|e| {
                error!("❌ Failed to create order item: {e}");
                ServiceError::Repo(e)
            })?;

        Ok(ApiResponse::success(
            "Order item created successfully",
            OrderItemResponse::from(created),
        ))
    }

    async fn create_batch(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderItemBatchCommand,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError> {
        info!("🏗️ Creating batch of {} order item(s)", req.items.len());

        req.validate().map_err(|e| {
            error!("❌ Rejected order item batch: {e}");
            ServiceError::from(e)
        })?;

        let items = req.to_entities();
        for item in &items {
            item.validate()?;
        }

        let created = self.command.create_batch(ctx, &items).await.map_err(|e| {
            error!("❌ Order item batch failed, nothing persisted: {e}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse::success(
            "Order items created successfully",
            OrderItemResponse::from_order_items(created),
        ))
    }

    async fn update_order_item(
        &self,
        ctx: &RequestContext,
        req: &UpdateOrderItemCommand,
    ) -> Result<ApiResponse<OrderItemResponse>, ServiceError> {
        info!("🔄 Updating order item {}", req.id);

        req.validate().map_err(|e| {
            error!("❌ Rejected update order item request: {e}");
            ServiceError::from(e)
        })?;

        let mut item = self.query.find_by_id(ctx, req.id).await?;
        item.update(req.order_id, req.product_id, req.quantity, req.price);
        item.validate()?;

        let updated = self
            .command
            .update_order_item(ctx, &item)
            .await
            .map_err(|e| {
                error!("❌ Failed to update order item {}: {e}", req.id);
                ServiceError::Repo(e)
            })?;

        Ok(ApiResponse::success(
            "Order item updated successfully",
            OrderItemResponse::from(updated),
        ))
    }

    async fn delete_order_item(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderItemCommand,
    ) -> Result<ApiResponse<()>, ServiceError> {
        req.validate()?;

        self.command
            .delete_order_item(ctx, req.id)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order item {}: {e}", req.id);
                ServiceError::Repo(e)
            })?;

        Ok(ApiResponse::success("Order item deleted successfully", ()))
    }

    async fn hard_delete_order_item(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderItemCommand,
    ) -> Result<ApiResponse<()>, ServiceError> {
        req.validate()?;

        self.command
            .hard_delete_order_item(ctx, req.id)
            .await
            .map_err(|e| {
                error!("❌ Failed to permanently delete order item {}: {e}", req.id);
                ServiceError::Repo(e)
            })?;

        Ok(ApiResponse::success("Order item permanently deleted", ()))
    }

    async fn delete_by_order(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderItemsByOrderCommand,
    ) -> Result<ApiResponse<u64>, ServiceError> {
        req.validate()?;

        let affected = self
            .command
            .delete_by_order_id(ctx, req.order_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete items of order {}: {e}", req.order_id);
                ServiceError::Repo(e)
            })?;

        Ok(ApiResponse::success(
            "Order items deleted successfully",
            affected,
        ))
    }
}
