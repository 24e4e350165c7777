//! Store-backed checks. Run with `cargo test -- --ignored` against a database
//! reachable through `DATABASE_URL`.

use order::{
    abstract_trait::{
        order::service::{OrderCommandServiceTrait, OrderQueryServiceTrait},
        order_item::service::{OrderItemCommandServiceTrait, OrderItemQueryServiceTrait},
    },
    di::{DependenciesInject, DependenciesInjectDeps},
    domain::requests::{
        order::{
            CreateOrderCommand, DeleteOrderCommand, GetOrderByIdQuery, ListOrdersQuery,
            SearchOrdersQuery,
        },
        order_item::{
            CreateOrderItemBatchCommand, CreateOrderItemCommand, ListOrderItemsByOrderQuery,
            ListOrderItemsQuery, SearchOrderItemsQuery,
        },
    },
};
use rust_decimal::Decimal;
use shared::{
    context::RequestContext,
    errors::{RepositoryError, ServiceError},
};
use sqlx::PgPool;
use uuid::Uuid;

fn services(pool: PgPool) -> DependenciesInject {
    DependenciesInject::new(DependenciesInjectDeps::postgres(pool))
}

fn item(order_id: Uuid, quantity: i32) -> CreateOrderItemCommand {
    CreateOrderItemCommand {
        order_id,
        product_id: Uuid::now_v7(),
        quantity,
        price: Decimal::new(1250, 2),
    }
}

async fn seed(deps: &DependenciesInject) -> Uuid {
    deps.order_command
        .create_order(
            &RequestContext::background(),
            &CreateOrderCommand {
                customer_id: Uuid::now_v7(),
                total: Decimal::new(5000, 2),
                status: "pending".into(),
            },
        )
        .await
        .unwrap()
        .data
        .id
}

#[sqlx::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn soft_delete_cascades_in_one_transaction(pool: PgPool) {
    let deps = services(pool.clone());
    let ctx = RequestContext::background();
    let order_id = seed(&deps).await;
    deps.order_item_command
        .create_batch(
            &ctx,
            &CreateOrderItemBatchCommand {
                items: vec![item(order_id, 1), item(order_id, 2)],
            },
        )
        .await
        .unwrap();

    deps.order_command
        .delete_order(&ctx, &DeleteOrderCommand { id: order_id })
        .await
        .unwrap();

    let trashed: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM order_items WHERE order_id = $1 AND deleted_at IS NOT NULL",
    )
    .bind(order_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(trashed, 2);

    let visible = deps
        .order_item_query
        .find_by_order(&ctx, &ListOrderItemsByOrderQuery { order_id })
        .await
        .unwrap()
        .data;
    assert!(visible.is_empty());
}

#[sqlx::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn hard_delete_removes_every_row(pool: PgPool) {
    let deps = services(pool.clone());
    let ctx = RequestContext::background();
    let order_id = seed(&deps).await;
    deps.order_item_command
        .create_order_item(&ctx, &item(order_id, 3))
        .await
        .unwrap();

    deps.order_command
        .hard_delete_order(&ctx, &DeleteOrderCommand { id: order_id })
        .await
        .unwrap();

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items WHERE order_id = $1")
        .bind(order_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let err = deps
        .order_query
        .find_by_id(&ctx, &GetOrderByIdQuery { id: order_id })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound { .. })));
}

#[sqlx::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn failed_batch_rolls_back(pool: PgPool) {
    let deps = services(pool.clone());
    let ctx = RequestContext::background();
    let order_id = seed(&deps).await;

    let err = deps
        .order_item_command
        .create_batch(
            &ctx,
            &CreateOrderItemBatchCommand {
                items: vec![item(order_id, 1), item(Uuid::now_v7(), 1)],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepositoryError::ForeignKey(_))));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[sqlx::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn projection_and_paging_read_from_the_store(pool: PgPool) {
    let deps = services(pool);
    let ctx = RequestContext::background();
    let order_id = seed(&deps).await;
    seed(&deps).await;
    deps.order_item_command
        .create_batch(
            &ctx,
            &CreateOrderItemBatchCommand {
                items: vec![item(order_id, 1), item(order_id, 2), item(order_id, 3)],
            },
        )
        .await
        .unwrap();

    let projection = deps
        .order_query
        .find_with_items(&ctx, &GetOrderByIdQuery { id: order_id })
        .await
        .unwrap()
        .data;
    assert_eq!(projection.items.len(), 3);

    let page = deps
        .order_query
        .list_orders(
            &ctx,
            &ListOrdersQuery {
                page: 1,
                page_size: 1,
                sort_by: "total".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .data;
    assert_eq!(page.total, 2);
    assert_eq!(page.data.len(), 1);
}

#[sqlx::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn search_treats_like_wildcards_literally(pool: PgPool) {
    let deps = services(pool);
    let ctx = RequestContext::background();
    let order_id = seed(&deps).await;
    deps.order_item_command
        .create_order_item(&ctx, &item(order_id, 1))
        .await
        .unwrap();

    for term in ["%", "_"] {
        let orders = deps
            .order_query
            .search_orders(
                &ctx,
                &SearchOrdersQuery {
                    query: term.into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .data;
        assert_eq!(orders.total, 0);
        assert!(orders.data.is_empty());

        let items = deps
            .order_item_query
            .search_order_items(
                &ctx,
                &SearchOrderItemsQuery {
                    query: term.into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .data;
        assert_eq!(items.total, 0);
    }
}

#[sqlx::test]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn huge_page_number_is_an_empty_page(pool: PgPool) {
    let deps = services(pool);
    let ctx = RequestContext::background();
    let order_id = seed(&deps).await;
    deps.order_item_command
        .create_order_item(&ctx, &item(order_id, 1))
        .await
        .unwrap();

    let orders = deps
        .order_query
        .list_orders(
            &ctx,
            &ListOrdersQuery {
                page: i64::MAX,
                page_size: 100,
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .data;
    assert!(orders.data.is_empty());
    assert_eq!(orders.total, 1);

    let items = deps
        .order_item_query
        .list_order_items(
            &ctx,
            &ListOrderItemsQuery {
                page: i64::MAX,
                page_size: 100,
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .data;
    assert!(items.data.is_empty());
    assert_eq!(items.total, 1);
}
