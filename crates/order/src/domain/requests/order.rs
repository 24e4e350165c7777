use crate::{
    domain::{
        requests::pagination::{
            SortDirection, normalize_limit, normalize_offset, normalize_page, normalize_search,
            normalize_sort_by, normalize_sort_dir,
        },
        validation::{validate_non_negative, validate_not_nil},
    },
    model::order::Order as OrderModel,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Total,
    Status,
}

impl OrderSortField {
    /// Unknown names fall back to `created_at`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "updated_at" => OrderSortField::UpdatedAt,
            "total" => OrderSortField::Total,
            "status" => OrderSortField::Status,
            _ => OrderSortField::CreatedAt,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            OrderSortField::CreatedAt => "created_at",
            OrderSortField::UpdatedAt => "updated_at",
            OrderSortField::Total => "total",
            OrderSortField::Status => "status",
        }
    }
}

/// Repository-level page request for orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindAllOrders {
    pub offset: i64,
    pub limit: i64,
    pub sort_by: OrderSortField,
    pub sort_dir: SortDirection,
    pub search: Option<String>,
}

impl Default for FindAllOrders {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: super::pagination::DEFAULT_PAGE_SIZE,
            sort_by: OrderSortField::default(),
            sort_dir: SortDirection::default(),
            search: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderCommand {
    #[validate(custom(function = "validate_not_nil"))]
    pub customer_id: Uuid,

    #[validate(custom(function = "validate_non_negative"))]
    pub total: Decimal,

    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

impl CreateOrderCommand {
    pub fn to_entity(&self) -> OrderModel {
        OrderModel::new(self.customer_id, self.total, self.status.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOrderCommand {
    #[validate(custom(function = "validate_not_nil"))]
    pub id: Uuid,

    #[validate(custom(function = "validate_not_nil"))]
    pub customer_id: Uuid,

    #[validate(custom(function = "validate_non_negative"))]
    pub total: Decimal,

    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteOrderCommand {
    #[validate(custom(function = "validate_not_nil"))]
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GetOrderByIdQuery {
    #[validate(custom(function = "validate_not_nil"))]
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListOrdersByStatusQuery {
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListOrdersByCustomerQuery {
    #[validate(custom(function = "validate_not_nil"))]
    pub customer_id: Uuid,
}

/// Page-numbered listing. Out-of-range input is normalized, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOrdersQuery {
    pub page: i64,
    pub page_size: i64,
    pub sort_by: String,
    pub sort_dir: String,
    pub search: String,
}

impl ListOrdersQuery {
    pub fn normalize(&mut self) {
        self.page = normalize_page(self.page);
        self.page_size = normalize_limit(self.page_size);
        self.sort_dir = normalize_sort_dir(&self.sort_dir);
        self.sort_by = normalize_sort_by(&self.sort_by);
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn to_find_all(&self) -> FindAllOrders {
        FindAllOrders {
            offset: self.offset(),
            limit: self.page_size,
            sort_by: OrderSortField::from_name(&self.sort_by),
            sort_dir: SortDirection::parse_or_default(&self.sort_dir),
            search: normalize_search(&self.search),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAllOrdersQuery {
    pub offset: i64,
    pub limit: i64,
}

impl GetAllOrdersQuery {
    pub fn normalize(&mut self) {
        self.offset = normalize_offset(self.offset);
        self.limit = normalize_limit(self.limit);
    }

    pub fn to_find_all(&self) -> FindAllOrders {
        FindAllOrders {
            offset: self.offset,
            limit: self.limit,
            ..FindAllOrders::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOrdersQuery {
    pub query: String,
    pub offset: i64,
    pub limit: i64,
}

impl SearchOrdersQuery {
    pub fn normalize(&mut self) {
        self.offset = normalize_offset(self.offset);
        self.limit = normalize_limit(self.limit);
    }

    pub fn to_find_all(&self) -> FindAllOrders {
        FindAllOrders {
            offset: self.offset,
            limit: self.limit,
            search: normalize_search(&self.query),
            ..FindAllOrders::default()
        }
    }
}
