//! Order service: validation rules that must pass before any mutation

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, MonthlyProfit, NewOrder, OrderDetail, OrderRepository, OrderSummary,
};

/// Service wrapping the order repository.
///
/// Reads pass straight through; mutations are validated first so a failed
/// request never produces a partial write.
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_orders(&self) -> DomainResult<Vec<OrderSummary>> {
        self.repo.find_all().await
    }

    pub async fn get_order_by_id(&self, order_id: Uuid) -> DomainResult<Option<OrderDetail>> {
        self.repo.find_by_id(order_id).await
    }

    pub async fn get_orders_by_status(&self, status_name: &str) -> DomainResult<Vec<OrderSummary>> {
        self.repo.find_by_status(status_name).await
    }

    pub async fn get_monthly_profit(&self) -> DomainResult<Vec<MonthlyProfit>> {
        self.repo.monthly_profit().await
    }

    /// Reassign an order's status.
    ///
    /// Fails with a validation error if the status name is blank or unknown,
    /// and with not-found if the order does not exist. Only then is the
    /// repository update issued.
    pub async fn update_order_status(
        &self,
        order_id: Uuid,
        status_name: &str,
    ) -> DomainResult<OrderSummary> {
        if status_name.trim().is_empty() {
            return Err(DomainError::Validation("Status is required.".to_string()));
        }

        if !self.repo.status_exists(status_name).await? {
            return Err(DomainError::Validation(format!(
                "Status '{}' not found.",
                status_name
            )));
        }

        if self.repo.find_by_id(order_id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "Order",
                field: "id",
                value: order_id.to_string(),
            });
        }

        let summary = self.repo.update_status(order_id, status_name).await?;

        info!(order_id = %order_id, status = status_name, "Order status updated");

        Ok(summary)
    }

    /// Create an order after checking every referenced catalog entry exists
    /// and no two items share the same (service, product) pair. Positions in
    /// error messages are 1-based.
    pub async fn create_order(&self, order: NewOrder) -> DomainResult<OrderDetail> {
        for (idx, item) in order.items.iter().enumerate() {
            let position = idx + 1;

            if !self.repo.service_exists(item.service_id).await? {
                return Err(DomainError::Validation(format!(
                    "Item {}: service with id {} does not exist.",
                    position, item.service_id
                )));
            }

            if !self.repo.product_exists(item.product_id).await? {
                return Err(DomainError::Validation(format!(
                    "Item {}: product with id {} does not exist.",
                    position, item.product_id
                )));
            }
        }

        let mut seen = HashSet::new();
        for item in &order.items {
            if !seen.insert((item.service_id, item.product_id)) {
                return Err(DomainError::Validation(
                    "Order contains duplicate items with the same service and product combination."
                        .to_string(),
                ));
            }
        }

        let detail = self.repo.create(order).await?;

        info!(
            order_id = %detail.id,
            item_count = detail.item_count,
            "Order created"
        );

        Ok(detail)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{NewOrderItem, OrderItemDetail};

    /// Fake repository: fixed catalog, one known order, write flags.
    struct FakeRepo {
        known_order: Uuid,
        known_service: Uuid,
        known_product: Uuid,
        statuses: Vec<&'static str>,
        updated: AtomicBool,
        created: AtomicBool,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                known_order: Uuid::new_v4(),
                known_service: Uuid::new_v4(),
                known_product: Uuid::new_v4(),
                statuses: vec!["Created", "Completed"],
                updated: AtomicBool::new(false),
                created: AtomicBool::new(false),
            }
        }

        fn detail(&self, order_id: Uuid) -> OrderDetail {
            OrderDetail {
                id: order_id,
                reseller_id: Uuid::new_v4(),
                customer_id: Uuid::new_v4(),
                status_id: Uuid::new_v4(),
                status_name: "Created".to_string(),
                item_count: 1,
                total_cost: Decimal::new(1000, 2),
                total_price: Decimal::new(2000, 2),
                created_at: Utc::now(),
                items: vec![OrderItemDetail {
                    id: Uuid::new_v4(),
                    order_id,
                    service_id: self.known_service,
                    service_name: "Service A".to_string(),
                    product_id: self.known_product,
                    product_name: "Product X".to_string(),
                    unit_cost: Decimal::new(500, 2),
                    unit_price: Decimal::new(1000, 2),
                    total_cost: Decimal::new(1000, 2),
                    total_price: Decimal::new(2000, 2),
                    quantity: 2,
                }],
            }
        }
    }

    #[async_trait]
    impl OrderRepository for FakeRepo {
        async fn find_all(&self) -> DomainResult<Vec<OrderSummary>> {
            Ok(vec![self.detail(self.known_order).summary()])
        }

        async fn find_by_status(&self, _status_name: &str) -> DomainResult<Vec<OrderSummary>> {
            Ok(vec![])
        }

        async fn find_by_id(&self, order_id: Uuid) -> DomainResult<Option<OrderDetail>> {
            if order_id == self.known_order {
                Ok(Some(self.detail(order_id)))
            } else {
                Ok(None)
            }
        }

        async fn update_status(
            &self,
            order_id: Uuid,
            status_name: &str,
        ) -> DomainResult<OrderSummary> {
            self.updated.store(true, Ordering::SeqCst);
            let mut summary = self.detail(order_id).summary();
            summary.status_name = status_name.to_string();
            Ok(summary)
        }

        async fn status_exists(&self, status_name: &str) -> DomainResult<bool> {
            Ok(self.statuses.contains(&status_name))
        }

        async fn product_exists(&self, product_id: Uuid) -> DomainResult<bool> {
            Ok(product_id == self.known_product)
        }

        async fn service_exists(&self, service_id: Uuid) -> DomainResult<bool> {
            Ok(service_id == self.known_service)
        }

        async fn create(&self, _order: NewOrder) -> DomainResult<OrderDetail> {
            self.created.store(true, Ordering::SeqCst);
            Ok(self.detail(Uuid::new_v4()))
        }

        async fn monthly_profit(&self) -> DomainResult<Vec<MonthlyProfit>> {
            Ok(vec![])
        }
    }

    fn service_with(repo: Arc<FakeRepo>) -> OrderService {
        OrderService::new(repo)
    }

    fn item(service_id: Uuid, product_id: Uuid) -> NewOrderItem {
        NewOrderItem {
            service_id,
            product_id,
            quantity: 1,
        }
    }

    #[tokio::test]
    async fn update_status_rejects_blank_name() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let err = svc
            .update_order_status(repo.known_order, "   ")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(!repo.updated.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let err = svc
            .update_order_status(repo.known_order, "Shipped")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(!repo.updated.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn update_status_rejects_missing_order() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let err = svc
            .update_order_status(Uuid::new_v4(), "Completed")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: "Order", .. }));
        assert!(!repo.updated.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn update_status_delegates_when_valid() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let summary = svc
            .update_order_status(repo.known_order, "Completed")
            .await
            .unwrap();

        assert_eq!(summary.status_name, "Completed");
        assert!(repo.updated.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn create_rejects_unknown_service_with_position() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let order = NewOrder {
            reseller_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            items: vec![item(Uuid::new_v4(), repo.known_product)],
        };

        let err = svc.create_order(order).await.unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.starts_with("Item 1:"), "{}", msg),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(!repo.created.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn create_rejects_unknown_product_with_position() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let order = NewOrder {
            reseller_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            items: vec![
                item(repo.known_service, repo.known_product),
                item(repo.known_service, Uuid::new_v4()),
            ],
        };

        let err = svc.create_order(order).await.unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.starts_with("Item 2:"), "{}", msg);
                assert!(msg.contains("product"), "{}", msg);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(!repo.created.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_service_product_pair() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let order = NewOrder {
            reseller_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            items: vec![
                item(repo.known_service, repo.known_product),
                item(repo.known_service, repo.known_product),
            ],
        };

        let err = svc.create_order(order).await.unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("duplicate"), "{}", msg),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(!repo.created.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn create_delegates_when_valid() {
        let repo = Arc::new(FakeRepo::new());
        let svc = service_with(repo.clone());

        let order = NewOrder {
            reseller_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            items: vec![item(repo.known_service, repo.known_product)],
        };

        let detail = svc.create_order(order).await.unwrap();
        assert_eq!(detail.status_name, "Created");
        assert!(repo.created.load(Ordering::SeqCst));
    }
}
