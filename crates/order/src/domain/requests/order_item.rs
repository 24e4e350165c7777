use crate::{
    domain::{
        requests::pagination::{
            DEFAULT_PAGE_SIZE, SortDirection, normalize_limit, normalize_offset, normalize_page,
            normalize_search, normalize_sort_by, normalize_sort_dir,
        },
        validation::{validate_non_negative, validate_not_nil},
    },
    model::order_item::OrderItem as OrderItemModel,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderItemSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Quantity,
    Price,
}

impl OrderItemSortField {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "updated_at" => OrderItemSortField::UpdatedAt,
            "quantity" => OrderItemSortField::Quantity,
            "price" => OrderItemSortField::Price,
            _ => OrderItemSortField::CreatedAt,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            OrderItemSortField::CreatedAt => "created_at",
            OrderItemSortField::UpdatedAt => "updated_at",
            OrderItemSortField::Quantity => "quantity",
            OrderItemSortField::Price => "price",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindAllOrderItems {
    pub offset: i64,
    pub limit: i64,
    pub sort_by: OrderItemSortField,
    pub sort_dir: SortDirection,
    pub search: Option<String>,
}

impl Default for FindAllOrderItems {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
            sort_by: OrderItemSortField::default(),
            sort_dir: SortDirection::default(),
            search: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderItemCommand {
    #[validate(custom(function = "validate_not_nil"))]
    pub order_id: Uuid,

    #[validate(custom(function = "validate_not_nil"))]
    pub product_id: Uuid,

    #[validate(range(min = 1))]
    pub quantity: i32,

    #[validate(custom(function = "validate_non_negative"))]
    pub price: Decimal,
}

impl CreateOrderItemCommand {
    pub fn to_entity(&self) -> OrderItemModel {
        OrderItemModel::new(self.order_id, self.product_id, self.quantity, self.price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderItemBatchCommand {
    #[validate(length(min = 1), nested)]
    pub items: Vec<CreateOrderItemCommand>,
}

impl CreateOrderItemBatchCommand {
    pub fn to_entities(&self) -> Vec<OrderItemModel> {
        self.items
            .iter()
            .map(CreateOrderItemCommand::to_entity)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOrderItemCommand {
    #[validate(custom(function = "validate_not_nil"))]
    pub id: Uuid,

    #[validate(custom(function = "validate_not_nil"))]
    pub order_id: Uuid,

    #[validate(custom(function = "validate_not_nil"))]
    pub product_id: Uuid,

    #[validate(range(min = 1))]
    pub quantity: i32,

    #[validate(custom(function = "validate_non_negative"))]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteOrderItemCommand {
    #[validate(custom(function = "validate_not_nil"))]
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteOrderItemsByOrderCommand {
    #[validate(custom(function = "validate_not_nil"))]
    pub order_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GetOrderItemByIdQuery {
    #[validate(custom(function = "validate_not_nil"))]
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListOrderItemsByOrderQuery {
    #[validate(custom(function = "validate_not_nil"))]
    pub order_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListOrderItemsByProductQuery {
    #[validate(custom(function = "validate_not_nil"))]
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOrderItemsQuery {
    pub page: i64,
    pub page_size: i64,
    pub sort_by: String,
    pub sort_dir: String,
    pub search: String,
}

impl ListOrderItemsQuery {
    pub fn normalize(&mut self) {
        self.page = normalize_page(self.page);
        self.page_size = normalize_limit(self.page_size);
        self.sort_dir = normalize_sort_dir(&self.sort_dir);
        self.sort_by = normalize_sort_by(&self.sort_by);
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn to_find_all(&self) -> FindAllOrderItems {
        FindAllOrderItems {
            offset: self.offset(),
            limit: self.page_size,
            sort_by: OrderItemSortField::from_name(&self.sort_by),
            sort_dir: SortDirection::parse_or_default(&self.sort_dir),
            search: normalize_search(&self.search),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAllOrderItemsQuery {
    pub offset: i64,
    pub limit: i64,
}

impl GetAllOrderItemsQuery {
    pub fn normalize(&mut self) {
        self.offset = normalize_offset(self.offset);
        self.limit = normalize_limit(self.limit);
    }

    pub fn to_find_all(&self) -> FindAllOrderItems {
        FindAllOrderItems {
            offset: self.offset,
            limit: self.limit,
            ..FindAllOrderItems::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOrderItemsQuery {
    pub query: String,
    pub offset: i64,
    pub limit: i64,
}

impl SearchOrderItemsQuery {
    pub fn normalize(&mut self) {
        self.offset = normalize_offset(self.offset);
        self.limit = normalize_limit(self.limit);
    }

    pub fn to_find_all(&self) -> FindAllOrderItems {
        FindAllOrderItems {
            offset: self.offset,
            limit: self.limit,
            search: normalize_search(&self.query),
            ..FindAllOrderItems::default()
        }
    }
}
