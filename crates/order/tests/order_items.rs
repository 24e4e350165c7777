mod common;

use common::{create_item_command, ctx, harness, money, seed_item, seed_order};
use order::{
    abstract_trait::{
        order::service::{OrderCommandServiceTrait, OrderQueryServiceTrait},
        order_item::service::{OrderItemCommandServiceTrait, OrderItemQueryServiceTrait},
    },
    domain::requests::{
        order::{DeleteOrderCommand, GetOrderByIdQuery},
        order_item::{
            CreateOrderItemBatchCommand, DeleteOrderItemCommand, DeleteOrderItemsByOrderCommand,
            GetOrderItemByIdQuery, ListOrderItemsByOrderQuery, ListOrderItemsByProductQuery,
            UpdateOrderItemCommand,
        },
    },
};
use shared::errors::{ErrorOutcome, RepositoryError, ServiceError};
use uuid::Uuid;

#[tokio::test]
async fn item_for_unknown_order_is_a_foreign_key_violation() {
    let h = harness();

    let err = h
        .state
        .di_container
        .order_item_command
        .create_order_item(&ctx(), &create_item_command(Uuid::now_v7(), 1, money(100)))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::ForeignKey(_))));
    assert_eq!(ErrorOutcome::from(&err), ErrorOutcome::RejectedRequest);
}

#[tokio::test]
async fn item_for_soft_deleted_order_is_a_foreign_key_violation() {
    let h = harness();
    let created = seed_order(&h, "pending").await;
    h.state
        .di_container
        .order_command
        .delete_order(&ctx(), &DeleteOrderCommand { id: created.id })
        .await
        .unwrap();

    let err = h
        .state
        .di_container
        .order_item_command
        .create_order_item(&ctx(), &create_item_command(created.id, 1, money(100)))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::ForeignKey(_))));
    assert!(h.store.stored_order_items(created.id).await.is_empty());
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let h = harness();
    let created = seed_order(&h, "pending").await;

    let err = h
        .state
        .di_container
        .order_item_command
        .create_order_item(&ctx(), &create_item_command(created.id, 0, money(100)))
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation(messages) => {
            assert!(messages.iter().any(|m| m.starts_with("quantity")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn batch_with_one_bad_reference_persists_nothing() {
    let h = harness();
    let live = seed_order(&h, "pending").await;

    let batch = CreateOrderItemBatchCommand {
        items: vec![
            create_item_command(live.id, 1, money(100)),
            create_item_command(live.id, 2, money(200)),
            create_item_command(Uuid::now_v7(), 3, money(300)),
        ],
    };

    let err = h
        .state
        .di_container
        .order_item_command
        .create_batch(&ctx(), &batch)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::ForeignKey(_))));
    assert!(h.store.stored_order_items(live.id).await.is_empty());
}

#[tokio::test]
async fn batch_validation_names_the_offending_entry() {
    let h = harness();
    let live = seed_order(&h, "pending").await;

    let batch = CreateOrderItemBatchCommand {
        items: vec![
            create_item_command(live.id, 1, money(100)),
            create_item_command(live.id, 0, money(100)),
        ],
    };

    let err = h
        .state
        .di_container
        .order_item_command
        .create_batch(&ctx(), &batch)
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation(messages) => {
            assert!(messages.iter().any(|m| m.starts_with("items[1].quantity")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(h.store.stored_order_items(live.id).await.is_empty());
}

#[tokio::test]
async fn empty_batch_is_rejected() {
    let h = harness();

    let err = h
        .state
        .di_container
        .order_item_command
        .create_batch(&ctx(), &CreateOrderItemBatchCommand { items: vec![] })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn successful_batch_is_fully_visible_in_order_projection() {
    let h = harness();
    let live = seed_order(&h, "pending").await;

    let batch = CreateOrderItemBatchCommand {
        items: (1..=5)
            .map(|quantity| create_item_command(live.id, quantity, money(1000)))
            .collect(),
    };

    let created = h
        .state
        .di_container
        .order_item_command
        .create_batch(&ctx(), &batch)
        .await
        .unwrap()
        .data;
    assert_eq!(created.len(), 5);

    let projection = h
        .state
        .di_container
        .order_query
        .find_with_items(&ctx(), &GetOrderByIdQuery { id: live.id })
        .await
        .unwrap()
        .data;

    assert_eq!(projection.order.id, live.id);
    assert_eq!(projection.items.len(), 5);

    let keys: Vec<_> = projection
        .items
        .iter()
        .map(|item| (item.created_at, item.id))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[tokio::test]
async fn projection_skips_soft_deleted_items() {
    let h = harness();
    let live = seed_order(&h, "pending").await;
    let kept = seed_item(&h, live.id, 1).await;
    let dropped = seed_item(&h, live.id, 2).await;

    h.state
        .di_container
        .order_item_command
        .delete_order_item(&ctx(), &DeleteOrderItemCommand { id: dropped.id })
        .await
        .unwrap();

    let projection = h
        .state
        .di_container
        .order_query
        .find_with_items(&ctx(), &GetOrderByIdQuery { id: live.id })
        .await
        .unwrap()
        .data;

    let ids: Vec<Uuid> = projection.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![kept.id]);
}

#[tokio::test]
async fn update_cannot_move_item_to_deleted_order() {
    let h = harness();
    let source = seed_order(&h, "pending").await;
    let target = seed_order(&h, "pending").await;
    let item = seed_item(&h, source.id, 1).await;

    h.state
        .di_container
        .order_command
        .delete_order(&ctx(), &DeleteOrderCommand { id: target.id })
        .await
        .unwrap();

    let err = h
        .state
        .di_container
        .order_item_command
        .update_order_item(
            &ctx(),
            &UpdateOrderItemCommand {
                id: item.id,
                order_id: target.id,
                product_id: item.product_id,
                quantity: 2,
                price: money(100),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::ForeignKey(_))));

    let unchanged = h
        .state
        .di_container
        .order_item_query
        .find_by_id(&ctx(), &GetOrderItemByIdQuery { id: item.id })
        .await
        .unwrap()
        .data;
    assert_eq!(unchanged, item);
}

#[tokio::test]
async fn update_rewrites_item_fields() {
    let h = harness();
    let live = seed_order(&h, "pending").await;
    let item = seed_item(&h, live.id, 1).await;
    let product_id = Uuid::now_v7();

    let updated = h
        .state
        .di_container
        .order_item_command
        .update_order_item(
            &ctx(),
            &UpdateOrderItemCommand {
                id: item.id,
                order_id: live.id,
                product_id,
                quantity: 7,
                price: money(999),
            },
        )
        .await
        .unwrap()
        .data;

    assert_eq!(updated.product_id, product_id);
    assert_eq!(updated.quantity, 7);
    assert_eq!(updated.price, money(999));
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at >= item.updated_at);

    let by_product = h
        .state
        .di_container
        .order_item_query
        .find_by_product(&ctx(), &ListOrderItemsByProductQuery { product_id })
        .await
        .unwrap()
        .data;
    assert_eq!(by_product, vec![updated]);
}

#[tokio::test]
async fn delete_by_order_reports_how_many_items_were_touched() {
    let h = harness();
    let live = seed_order(&h, "pending").await;
    seed_item(&h, live.id, 1).await;
    seed_item(&h, live.id, 2).await;
    seed_item(&h, live.id, 3).await;

    let command = DeleteOrderItemsByOrderCommand { order_id: live.id };

    let first = h
        .state
        .di_container
        .order_item_command
        .delete_by_order(&ctx(), &command)
        .await
        .unwrap()
        .data;
    let second = h
        .state
        .di_container
        .order_item_command
        .delete_by_order(&ctx(), &command)
        .await
        .unwrap()
        .data;

    assert_eq!(first, 3);
    assert_eq!(second, 0);

    let remaining = h
        .state
        .di_container
        .order_item_query
        .find_by_order(&ctx(), &ListOrderItemsByOrderQuery { order_id: live.id })
        .await
        .unwrap()
        .data;
    assert!(remaining.is_empty());

    // the order itself stays active
    let order = h
        .state
        .di_container
        .order_query
        .find_by_id(&ctx(), &GetOrderByIdQuery { id: live.id })
        .await;
    assert!(order.is_ok());
}

#[tokio::test]
async fn hard_deleted_item_is_gone() {
    let h = harness();
    let live = seed_order(&h, "pending").await;
    let item = seed_item(&h, live.id, 1).await;

    h.state
        .di_container
        .order_item_command
        .hard_delete_order_item(&ctx(), &DeleteOrderItemCommand { id: item.id })
        .await
        .unwrap();

    let err = h
        .state
        .di_container
        .order_item_command
        .hard_delete_order_item(&ctx(), &DeleteOrderItemCommand { id: item.id })
        .await
        .unwrap_err();

    assert_eq!(ErrorOutcome::from(&err), ErrorOutcome::MissingResource);
    assert!(h.store.stored_order_items(live.id).await.is_empty());
}
