use crate::{
    abstract_trait::{
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
        order_item::{
            repository::{DynOrderItemCommandRepository, DynOrderItemQueryRepository},
            service::{DynOrderItemCommandService, DynOrderItemQueryService},
        },
    },
    repository::{
        memory::MemoryStore,
        order::{OrderCommandRepository, OrderQueryRepository},
        order_item::{OrderItemCommandRepository, OrderItemQueryRepository},
    },
    service::{
        order::{OrderCommandService, OrderQueryService},
        order_item::{OrderItemCommandService, OrderItemQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_command: DynOrderCommandService,
    pub order_query: DynOrderQueryService,
    pub order_item_command: DynOrderItemCommandService,
    pub order_item_query: DynOrderItemQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_command", &"OrderCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_item_command", &"OrderItemCommandService")
            .field("order_item_query", &"OrderItemQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub order_command: DynOrderCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_item_command: DynOrderItemCommandRepository,
    pub order_item_query: DynOrderItemQueryRepository,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            order_command: Arc::new(OrderCommandRepository::new(pool.clone())),
            order_query: Arc::new(OrderQueryRepository::new(pool.clone())),
            order_item_command: Arc::new(OrderItemCommandRepository::new(pool.clone())),
            order_item_query: Arc::new(OrderItemQueryRepository::new(pool)),
        }
    }

    pub fn in_memory(store: &MemoryStore) -> Self {
        let orders = Arc::new(store.order_repository());
        let items = Arc::new(store.order_item_repository());

        Self {
            order_command: orders.clone(),
            order_query: orders,
            order_item_command: items.clone(),
            order_item_query: items,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            order_command,
            order_query,
            order_item_command,
            order_item_query,
        } = deps;

        Self {
            order_command: Arc::new(OrderCommandService::new(order_command, order_query.clone())),
            order_query: Arc::new(OrderQueryService::new(order_query)),
            order_item_command: Arc::new(OrderItemCommandService::new(
                order_item_command,
                order_item_query.clone(),
            )),
            order_item_query: Arc::new(OrderItemQueryService::new(order_item_query)),
        }
    }
}
