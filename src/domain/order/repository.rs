//! Persistence contract for the order aggregate

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{MonthlyProfit, NewOrder, OrderDetail, OrderSummary};
use crate::domain::DomainResult;

/// Repository for orders and the read-only catalog lookups they depend on.
///
/// `update_status` and `create` assume the caller has already validated the
/// referenced status/order/catalog entries; a missing reference at this
/// level surfaces as a repository error, not a recoverable outcome.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders, newest first.
    async fn find_all(&self) -> DomainResult<Vec<OrderSummary>>;

    /// Orders whose status name matches exactly. An unknown name yields an
    /// empty list, not an error.
    async fn find_by_status(&self, status_name: &str) -> DomainResult<Vec<OrderSummary>>;

    async fn find_by_id(&self, order_id: Uuid) -> DomainResult<Option<OrderDetail>>;

    /// Reassign the order's status and return the refreshed summary.
    async fn update_status(&self, order_id: Uuid, status_name: &str)
        -> DomainResult<OrderSummary>;

    async fn status_exists(&self, status_name: &str) -> DomainResult<bool>;

    async fn product_exists(&self, product_id: Uuid) -> DomainResult<bool>;

    async fn service_exists(&self, service_id: Uuid) -> DomainResult<bool>;

    /// Persist the order and all its items atomically, then return the
    /// freshly read detail.
    async fn create(&self, order: NewOrder) -> DomainResult<OrderDetail>;

    /// Completed orders grouped by month of creation, ascending (year, month).
    async fn monthly_profit(&self) -> DomainResult<Vec<MonthlyProfit>>;
}
