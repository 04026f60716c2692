//! Order DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{MonthlyProfit, NewOrder, NewOrderItem, OrderDetail, OrderItemDetail, OrderSummary};

/// Aggregated order view for listings
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub item_count: u64,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(s: OrderSummary) -> Self {
        Self {
            id: s.id,
            reseller_id: s.reseller_id,
            customer_id: s.customer_id,
            status_id: s.status_id,
            status_name: s.status_name,
            item_count: s.item_count,
            total_cost: s.total_cost,
            total_price: s.total_price,
            created_date: s.created_at,
        }
    }
}

/// One order line with resolved catalog names and prices
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub order_id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub quantity: i32,
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(i: OrderItemDetail) -> Self {
        Self {
            id: i.id,
            order_id: i.order_id,
            service_id: i.service_id,
            service_name: i.service_name,
            product_id: i.product_id,
            product_name: i.product_name,
            unit_cost: i.unit_cost,
            unit_price: i.unit_price,
            total_cost: i.total_cost,
            total_price: i.total_price,
            quantity: i.quantity,
        }
    }
}

/// Expanded order view including every line item
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub item_count: u64,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub created_date: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderDetail> for OrderDetailResponse {
    fn from(d: OrderDetail) -> Self {
        Self {
            id: d.id,
            reseller_id: d.reseller_id,
            customer_id: d.customer_id,
            status_id: d.status_id,
            status_name: d.status_name,
            item_count: d.item_count,
            total_cost: d.total_cost,
            total_price: d.total_price,
            created_date: d.created_at,
            items: d.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Monthly profit report entry for completed orders
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProfitResponse {
    pub year: i32,
    pub month: u32,
    pub order_count: u64,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub profit: Decimal,
}

impl From<MonthlyProfit> for MonthlyProfitResponse {
    fn from(m: MonthlyProfit) -> Self {
        let profit = m.profit();
        Self {
            year: m.year,
            month: m.month,
            order_count: m.order_count,
            total_cost: m.total_cost,
            total_price: m.total_price,
            profit,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    #[validate(
        length(min = 1, message = "items must contain at least one entry"),
        nested
    )]
    pub items: Vec<CreateOrderItemRequest>,
}

// Serialize is required by the `length` validator on `items`, which captures
// the rejected value in its error params.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub service_id: Uuid,
    pub product_id: Uuid,
    #[validate(range(
        min = 1,
        max = 1_000_000_000,
        message = "quantity must be between 1 and 1000000000"
    ))]
    pub quantity: i32,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            reseller_id: req.reseller_id,
            customer_id: req.customer_id,
            items: req
                .items
                .into_iter()
                .map(|i| NewOrderItem {
                    service_id: i.service_id,
                    product_id: i.product_id,
                    quantity: i.quantity,
                })
                .collect(),
        }
    }
}

/// Query parameters for the status update endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UpdateStatusParams {
    /// Target status name (must exist)
    pub status_name: String,
}
