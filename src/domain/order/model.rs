//! Order domain views
//!
//! All monetary amounts are `Decimal` with two fractional digits. Totals are
//! computed at read time from current catalog prices, never persisted, so
//! historical totals shift when the catalog changes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Aggregated order view for listings
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    /// Number of line items (not the quantity sum)
    pub item_count: u64,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// One order line with resolved catalog names and prices
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemDetail {
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

/// Expanded order view including every line item
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub item_count: u64,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDetail>,
}

impl OrderDetail {
    /// Collapse the detail into its listing view.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            reseller_id: self.reseller_id,
            customer_id: self.customer_id,
            status_id: self.status_id,
            status_name: self.status_name.clone(),
            item_count: self.item_count,
            total_cost: self.total_cost,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }
}

/// Revenue/cost aggregate for completed orders in one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyProfit {
    pub year: i32,
    pub month: u32,
    pub order_count: u64,
    pub total_cost: Decimal,
    pub total_price: Decimal,
}

impl MonthlyProfit {
    pub fn profit(&self) -> Decimal {
        self.total_price - self.total_cost
    }
}

/// Input for creating an order. Callers guarantee `items` is non-empty;
/// the API layer rejects empty lists before this type is built.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub items: Vec<NewOrderItem>,
}

/// One requested order line
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub service_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_is_price_minus_cost() {
        let m = MonthlyProfit {
            year: 2024,
            month: 3,
            order_count: 2,
            total_cost: Decimal::new(1500, 2),
            total_price: Decimal::new(3500, 2),
        };
        assert_eq!(m.profit(), Decimal::new(2000, 2));
    }
}
