use crate::{
    abstract_trait::order::{
        repository::{DynOrderCommandRepository, DynOrderQueryRepository},
        service::OrderCommandServiceTrait,
    },
    domain::{
        requests::order::{CreateOrderCommand, DeleteOrderCommand, UpdateOrderCommand},
        response::{api::ApiResponse, order::OrderResponse},
    },
};
use async_trait::async_trait;
use shared::{context::RequestContext, errors::ServiceError};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, query: DynOrderQueryRepository) -> Self {
        Self { command, query }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        ctx: &RequestContext,
        req: &CreateOrderCommand,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🏗️ Creating order for customer {}", req.customer_id);

        req.validate().map_err(|e| {
            error!("❌ Rejected create order request: {e}");
            ServiceError::from(e)
        })?;

        let order = req.to_entity();
        order.validate()?;

        let created = self.command.create_order(ctx, &order).await.map_err(|e| {
            error!("❌ Failed to create order: {e}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse::success(
            "Order created successfully",
            OrderResponse::from(created),
        ))
    }

    async fn update_order(
        &self,
        ctx: &RequestContext,
        req: &UpdateOrderCommand,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🔄 Updating order {}", req.id);

        req.validate().map_err(|e| {
            error!("❌ Rejected update order request: {e}");
            ServiceError::from(e)
        })?;

        let mut order = self.query.find_by_id(ctx, req.id).await?;
        order.update(req.customer_id, req.total, req.status.clone());
        order.validate()?;

        let updated = self.command.update_order(ctx, &order).await.map_err(|e| {
            error!("❌ Failed to update order {}: {e}", req.id);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse::success(
            "Order updated successfully",
            OrderResponse::from(updated),
        ))
    }

    async fn delete_order(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderCommand,
    ) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting order {}", req.id);

        req.validate()?;

        self.command.delete_order(ctx, req.id).await.map_err(|e| {
            error!("❌ Failed to delete order {}: {e}", req.id);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse::success("Order deleted successfully", ()))
    }

    async fn hard_delete_order(
        &self,
        ctx: &RequestContext,
        req: &DeleteOrderCommand,
    ) -> Result<ApiResponse<()>, ServiceError> {
        info!("❌ Permanently deleting order {}", req.id);

        req.validate()?;

        self.command.hard_delete_order(ctx, req.id).await.map_err(|e| {
            error!("❌ Failed to permanently delete order {}: {e}", req.id);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse::success("Order permanently deleted", ()))
    }
}
